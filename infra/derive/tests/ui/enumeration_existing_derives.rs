use enumbase::prelude::*;

#[enumeration(name = "Direction")]
#[derive(Debug, Clone, Copy)]
enum Dir {
    #[default]
    NORTH = "n",
    SOUTH = "s",
}

fn main() {
    assert_eq!(Dir::type_name(), "Direction");
    assert_eq!(format!("{:?}", Dir::SOUTH), "SOUTH");
    assert!(Dir::SOUTH.is("s"));
}
