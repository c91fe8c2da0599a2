use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::Dispatch;

use i18n::{en_us, zh_cn, LanguageType};
use icons::BackIcon;
use rolodex_sdk::model::page::Page;
use rolodex_sdk::model::user::User;
use rolodex_sdk::state::{I18nState, Notify, UsersState};
use utils::tr;

#[derive(Properties, Clone, PartialEq)]
pub struct UserDetailProps {
    pub id: i64,
}

/// detail view for one user. looks the id up in the session store only; a
/// deep link before the load finished shows the not-found fallback.
pub struct UserDetail {
    users: Rc<UsersState>,
    i18n: FluentBundle<FluentResource>,
    _users_dis: Dispatch<UsersState>,
}

pub enum UserDetailMsg {
    UsersStateChanged(Rc<UsersState>),
}

impl Component for UserDetail {
    type Message = UserDetailMsg;

    type Properties = UserDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let _users_dis = Dispatch::global()
            .subscribe_silent(ctx.link().callback(UserDetailMsg::UsersStateChanged));
        // read once; navigating back and forth rebuilds the component anyway
        let res = match I18nState::get().lang {
            LanguageType::ZhCN => zh_cn::USER_DETAIL,
            LanguageType::EnUS => en_us::USER_DETAIL,
        };
        Self {
            users: _users_dis.get(),
            i18n: utils::create_bundle(res),
            _users_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UserDetailMsg::UsersStateChanged(state) => {
                self.users = state;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = self
            .users
            .items
            .iter()
            .find(|u| u.id == ctx.props().id);
        match user {
            Some(user) => self.render_card(user),
            None => html! {
                <div class="detail-panel not-found">
                    <p>{tr!(self.i18n, "not_found")}</p>
                    {self.back_link()}
                </div>
            },
        }
    }
}

impl UserDetail {
    fn back_link(&self) -> Html {
        html! {
            <Link<Page> classes="back" to={Page::Users}>
                <BackIcon />
                {tr!(self.i18n, "back")}
            </Link<Page>>
        }
    }

    fn render_card(&self, user: &User) -> Html {
        let address = user
            .address
            .as_ref()
            .map(|a| format!("{}, {}, {}, {}", a.street, a.suite, a.city, a.zipcode))
            .unwrap_or_else(|| "-".to_string());
        let company = user
            .company
            .as_ref()
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| "-".to_string());
        html! {
            <div class="detail-panel box-shadow">
                <h2>{user.name.clone()}</h2>
                <dl class="detail-fields">
                    <dt>{tr!(self.i18n, "email")}</dt>
                    <dd>{user.email.clone()}</dd>
                    <dt>{tr!(self.i18n, "phone")}</dt>
                    <dd>{user.phone.clone().unwrap_or_else(|| AttrValue::from("-"))}</dd>
                    <dt>{tr!(self.i18n, "website")}</dt>
                    <dd>{user.website.clone().unwrap_or_else(|| AttrValue::from("-"))}</dd>
                    <dt>{tr!(self.i18n, "address")}</dt>
                    <dd>{address}</dd>
                    <dt>{tr!(self.i18n, "company")}</dt>
                    <dd>{company}</dd>
                </dl>
                {self.back_link()}
            </div>
        }
    }
}
