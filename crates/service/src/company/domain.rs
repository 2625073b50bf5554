use models::{coerce, company};
use serde::{Deserialize, Serialize};

/// Create input; `COMPANY_ID` accepts numbers and integer strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateCompanyInput {
    #[serde(deserialize_with = "coerce::i32_lenient")]
    pub company_id: i32,
    pub company_name: String,
    pub company_city: String,
}

impl From<CreateCompanyInput> for company::Model {
    fn from(input: CreateCompanyInput) -> Self {
        company::Model {
            company_id: input.company_id,
            company_name: input.company_name,
            company_city: input.company_city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_is_coerced_from_string() {
        let input: CreateCompanyInput = serde_json::from_value(json!({
            "COMPANY_ID": "18", "COMPANY_NAME": "Order All", "COMPANY_CITY": "Boston"
        }))
        .unwrap();
        assert_eq!(company::Model::from(input).company_id, 18);
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let res = serde_json::from_value::<CreateCompanyInput>(json!({
            "COMPANY_ID": "eighteen", "COMPANY_NAME": "Order All", "COMPANY_CITY": "Boston"
        }));
        assert!(res.is_err());
    }
}
