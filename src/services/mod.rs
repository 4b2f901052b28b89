pub mod quiz_service;
pub mod share_code_service;
pub use quiz_service::QuizService;
pub use share_code_service::ShareCodeService;
