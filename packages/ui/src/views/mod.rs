mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod snippet_list;
pub use snippet_list::SnippetListView;

mod snippet_detail;
pub use snippet_detail::SnippetDetailView;

mod new_snippet;
pub use new_snippet::NewSnippetView;
