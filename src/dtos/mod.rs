pub mod productdtos;
pub mod userdtos;
