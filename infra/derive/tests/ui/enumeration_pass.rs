use enumbase::prelude::*;

/// Boolean-style enum stored as `"1"`/`"0"`.
#[enumeration]
pub enum Boolean {
    #[default]
    TRUE = "1",
    FALSE = "0",
}

fn main() {
    assert_eq!(Boolean::default(), Boolean::TRUE);
    assert_eq!(Boolean::from_value("0").unwrap(), Boolean::FALSE);
    assert_eq!("false".parse::<Boolean>().unwrap(), Boolean::FALSE);
    assert_eq!(Boolean::TRUE.to_string(), "1");
    assert_eq!(Boolean::type_name(), "Boolean");
}
