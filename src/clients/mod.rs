pub mod template_client;

pub use template_client::TemplateClient;
