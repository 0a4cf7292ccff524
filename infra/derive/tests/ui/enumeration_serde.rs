use enumbase::prelude::*;

#[enumeration]
pub enum Boolean {
    #[default]
    TRUE = "1",
    FALSE = "0",
}

#[enumeration]
pub enum Priority {
    LOW = -1,
    #[default]
    NORMAL = 0,
}

fn main() {
    assert_eq!(serde_json::to_string(&Boolean::FALSE).unwrap(), "\"0\"");
    assert_eq!(serde_json::from_str::<Boolean>("\"1\"").unwrap(), Boolean::TRUE);
    assert!(serde_json::from_str::<Boolean>("\"2\"").is_err());
    assert_eq!(serde_json::to_string(&Priority::LOW).unwrap(), "-1");
    assert_eq!(serde_json::from_str::<Priority>("0").unwrap(), Priority::NORMAL);
}
