pub mod enumeration;
