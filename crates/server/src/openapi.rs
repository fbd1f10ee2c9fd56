use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Schema mirror of `models::Bank`; keep the fields in step with it.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankDoc {
    pub account_number: String,
    pub trust: f64,
    pub transaction_fee: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::banks::get_banks,
        crate::routes::banks::get_bank,
        crate::routes::banks::add_bank,
        crate::routes::banks::update_bank,
        crate::routes::banks::delete_bank,
    ),
    components(schemas(HealthResponse, BankDoc)),
    tags(
        (name = "health"),
        (name = "banks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_bank_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/banks"));
        assert!(paths.contains_key("/api/banks/{account_number}"));
        assert!(paths["/api/banks"].get("patch").is_some());
    }

    #[test]
    fn bank_schema_matches_wire_type() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = doc["components"]["schemas"]["BankDoc"]["properties"].as_object().unwrap();
        let mut schema_fields: Vec<&str> = props.keys().map(String::as_str).collect();
        schema_fields.sort();

        let wire = serde_json::to_value(models::Bank::new("1", 1.0, 1)).unwrap();
        let mut wire_fields: Vec<&str> = wire.as_object().unwrap().keys().map(String::as_str).collect();
        wire_fields.sort();

        assert_eq!(schema_fields, wire_fields);
        assert_eq!(schema_fields, vec!["accountNumber", "transactionFee", "trust"]);
    }
}
