use yew_router::Routable;

// route table
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}
