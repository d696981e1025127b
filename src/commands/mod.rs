pub mod bell;
pub mod bloch;
pub mod init;
pub mod particles;
pub mod simulate;
