use sdk_metrics_publisher::{Error, Result};

#[test]
fn test_duplicate_step_display() {
    let err = Error::DuplicateStep {
        stack: "S3.GetObject".to_string(),
        id: "SdkMetricsPublisher".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("SdkMetricsPublisher"));
    assert!(msg.contains("S3.GetObject"));
}

#[test]
fn test_configuration_display() {
    let err = Error::Configuration("bad namespace".to_string());
    assert_eq!(err.to_string(), "configuration error: bad namespace");
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(Error::Configuration("x".into()))
    }
    assert!(returns_error().is_err());
}
