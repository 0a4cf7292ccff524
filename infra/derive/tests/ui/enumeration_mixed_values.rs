use enumbase::prelude::*;

#[enumeration]
enum Priority {
    LOW = -1,
    #[default]
    NORMAL = 0,
    HIGH = 10,
}

#[enumeration]
enum Toggle {
    #[default]
    ON = true,
    OFF = false,
}

fn main() {
    assert_eq!(Priority::default_value(), Value::Int(0));
    assert_eq!(Priority::from_value(-1).unwrap(), Priority::LOW);
    assert_eq!(Priority::from_value("10").unwrap(), Priority::HIGH);
    assert_eq!(Toggle::from_value(false).unwrap(), Toggle::OFF);
    assert_eq!(Toggle::ON.value(), Value::Bool(true));
}
