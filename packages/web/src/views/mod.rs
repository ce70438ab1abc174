mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod protected;
pub use protected::Protected;

mod snippets;
pub use snippets::Snippets;

mod snippet_detail;
pub use snippet_detail::SnippetDetail;

mod new_snippet;
pub use new_snippet::NewSnippet;
