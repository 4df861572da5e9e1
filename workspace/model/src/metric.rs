use serde::{Deserialize, Serialize};

/// One labelled numeric sample plotted by a bar, line or pie chart.
///
/// `name` doubles as the categorical axis key, so it must be unique within a
/// single chart's series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricPoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MetricPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            date: None,
            category: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let point = MetricPoint::new("Jan", 12000.0);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Jan", "value": 12000.0 }));
    }

    #[test]
    fn test_deserialize_with_optional_fields() {
        let point: MetricPoint = serde_json::from_str(
            r#"{ "name": "Books", "value": 18, "category": "retail", "date": "2024-06-01" }"#,
        )
        .unwrap();

        assert_eq!(
            point,
            MetricPoint::new("Books", 18.0)
                .with_category("retail")
                .with_date("2024-06-01")
        );
    }
}
