pub mod db_log;
pub mod logging;
