pub mod levelmodel;
pub mod productmodel;
pub mod usermodel;
