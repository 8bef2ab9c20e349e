//! Table payload validation

use serde_json::Value;
use shared::models::{NewTable, TableData};

use crate::utils::{AppError, AppResult};

/// Validate a create-table payload
pub fn validate_table(data: Option<&TableData>) -> AppResult<NewTable> {
    let data = data.ok_or_else(|| AppError::validation("Data was not provided with request."))?;

    let table_name = data
        .table_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("table_name field not provided and or empty"))?;
    if table_name.chars().count() < 2 {
        return Err(AppError::validation(
            "table_name must be at least 2 characters long",
        ));
    }

    let capacity = match &data.capacity {
        None | Some(Value::Null) => {
            return Err(AppError::validation(
                "capacity field not provided and or empty",
            ));
        }
        Some(Value::Number(n)) => n.as_i64(),
        Some(_) => None,
    };
    let capacity = capacity
        .ok_or_else(|| AppError::validation("The capacity field must be of type \"number\"."))?;
    if capacity < 1 {
        return Err(AppError::validation("capacity must be at least 1"));
    }

    Ok(NewTable {
        table_name: table_name.to_string(),
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> TableData {
        TableData {
            table_name: Some("Patio".into()),
            capacity: Some(json!(4)),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let t = validate_table(Some(&payload())).unwrap();
        assert_eq!(t.table_name, "Patio");
        assert_eq!(t.capacity, 4);
    }

    #[test]
    fn missing_wrapper_is_rejected() {
        let err = validate_table(None).unwrap_err();
        assert_eq!(message(err), "Data was not provided with request.");
    }

    #[test]
    fn short_table_name_is_rejected() {
        let mut data = payload();
        data.table_name = Some("A".into());
        let err = validate_table(Some(&data)).unwrap_err();
        assert_eq!(message(err), "table_name must be at least 2 characters long");

        data.table_name = Some("".into());
        let err = validate_table(Some(&data)).unwrap_err();
        assert_eq!(message(err), "table_name field not provided and or empty");
    }

    #[test]
    fn capacity_must_be_a_positive_number() {
        let mut data = payload();
        data.capacity = Some(json!("4"));
        let err = validate_table(Some(&data)).unwrap_err();
        assert_eq!(message(err), "The capacity field must be of type \"number\".");

        data.capacity = Some(json!(0));
        let err = validate_table(Some(&data)).unwrap_err();
        assert_eq!(message(err), "capacity must be at least 1");

        data.capacity = None;
        let err = validate_table(Some(&data)).unwrap_err();
        assert_eq!(message(err), "capacity field not provided and or empty");

        data.capacity = Some(json!(1));
        assert_eq!(validate_table(Some(&data)).unwrap().capacity, 1);
    }
}
