pub mod check;
pub mod platforms;
pub mod randomize;
