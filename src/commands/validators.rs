use std::path::Path;
use std::time::Duration;

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).is_file() {
        Ok(path.to_string())
    } else {
        Err(format!("File does not exist: {path}"))
    }
}

pub fn validate_timeout(value: &str) -> Result<Duration, String> {
    let secs = value
        .parse::<f64>()
        .map_err(|_| format!("Timeout value '{value}' must be a number"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("Timeout value '{value}' must be greater than zero"));
    }
    Ok(Duration::from_secs_f64(secs))
}
