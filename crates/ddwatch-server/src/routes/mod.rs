pub mod docs;
pub mod run;
pub mod status;
