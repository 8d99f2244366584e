pub mod endpoint;
pub mod environment;
pub mod history;
pub mod report;
pub mod response;
pub mod theme;
