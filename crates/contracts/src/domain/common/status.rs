use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary record status, `estado` on the wire (1 = active, 0 = inactive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn code(&self) -> i64 {
        match self {
            Status::Active => 1,
            Status::Inactive => 0,
        }
    }

    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            Status::Inactive
        } else {
            Status::Active
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Activo",
            Status::Inactive => "Inactivo",
        }
    }

    pub fn all() -> [Status; 2] {
        [Status::Active, Status::Inactive]
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = super::lenient::i64_from_any(deserializer)?;
        Ok(Status::from_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Status::Inactive).unwrap(), "0");
        assert_eq!(serde_json::from_str::<Status>("0").unwrap(), Status::Inactive);
        assert_eq!(serde_json::from_str::<Status>("\"1\"").unwrap(), Status::Active);
        assert_eq!(serde_json::from_str::<Status>("true").unwrap(), Status::Active);
    }
}
