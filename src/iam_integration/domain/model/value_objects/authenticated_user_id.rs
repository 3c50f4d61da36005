#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AuthenticatedUserId(i64);

impl AuthenticatedUserId {
    pub fn new(value: &str) -> Result<Self, String> {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| "subject must be a numeric user id".to_string())?;

        Self::from_raw(parsed)
    }

    pub fn from_raw(value: i64) -> Result<Self, String> {
        if value <= 0 {
            return Err("subject must be a positive user id".to_string());
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
