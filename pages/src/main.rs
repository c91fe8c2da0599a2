mod user_detail;
mod users;

use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::{BrowserRouter, Switch};

use components::lang_switch::LangSwitch;
use components::notification::NotificationCom;
use components::theme_switch::ThemeSwitch;
use rolodex_sdk::model::page::Page;

use crate::user_detail::UserDetail;
use crate::users::Users;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app" id="app">
                <header class="app-header">
                    <Link<Page> classes="brand" to={Page::Users}>{"Rolodex"}</Link<Page>>
                    <div class="header-actions">
                        <LangSwitch />
                        <ThemeSwitch />
                    </div>
                </header>
                <main>
                    <Switch<Page> render={move |page|
                        match page {
                            Page::Users => html!(<Users />),
                            Page::UserDetail{id} => html!(<UserDetail {id} />),
                            Page::NotFound => html!(<div class="not-found">{"404"}</div>),
                        }
                    }/>
                </main>
                <NotificationCom />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
