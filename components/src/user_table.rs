use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use i18n::{en_us, zh_cn, LanguageType};
use icons::{PencilIcon, TrashIcon};
use rolodex_sdk::model::page::Page;
use rolodex_sdk::model::user::User;
use utils::tr;

use crate::constant::{ACTIONS, COMPANY, EMAIL, NAME, NO_RESULT};

/// the display rows, already filtered and sorted by the page
#[derive(Properties, Clone, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub edit: Callback<User>,
    pub delete: Callback<i64>,
    pub lang: LanguageType,
}

pub struct UserTable {
    i18n: FluentBundle<FluentResource>,
}

pub enum UserTableMsg {
    RowClicked(i64),
    Edit(User),
    Delete(i64),
}

impl Component for UserTable {
    type Message = UserTableMsg;

    type Properties = UserTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            i18n: utils::create_bundle(Self::resource(ctx.props().lang)),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lang != old_props.lang {
            self.i18n = utils::create_bundle(Self::resource(ctx.props().lang));
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UserTableMsg::RowClicked(id) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::UserDetail { id });
                }
                false
            }
            UserTableMsg::Edit(user) => {
                ctx.props().edit.emit(user);
                false
            }
            UserTableMsg::Delete(id) => {
                ctx.props().delete.emit(id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = if ctx.props().users.is_empty() {
            html! {
                <tr><td class="no-result" colspan="4">{tr!(self.i18n, NO_RESULT)}</td></tr>
            }
        } else {
            ctx.props()
                .users
                .iter()
                .map(|user| self.render_row(ctx, user))
                .collect::<Html>()
        };
        html! {
            <table class="user-table">
                <thead>
                    <tr>
                        <th>{tr!(self.i18n, NAME)}</th>
                        <th>{tr!(self.i18n, EMAIL)}</th>
                        <th>{tr!(self.i18n, COMPANY)}</th>
                        <th class="actions-head">{tr!(self.i18n, ACTIONS)}</th>
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        }
    }
}

impl UserTable {
    fn resource(lang: LanguageType) -> &'static str {
        match lang {
            LanguageType::ZhCN => zh_cn::USERS,
            LanguageType::EnUS => en_us::USERS,
        }
    }

    fn render_row(&self, ctx: &Context<Self>, user: &User) -> Html {
        let id = user.id;
        let onclick = ctx.link().callback(move |_| UserTableMsg::RowClicked(id));
        let edit_target = user.clone();
        let onedit = ctx
            .link()
            .callback(move |_| UserTableMsg::Edit(edit_target.clone()));
        let ondelete = ctx.link().callback(move |_| UserTableMsg::Delete(id));
        let company = user
            .company
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| AttrValue::from("-"));
        html! {
            <tr key={id}>
                <td class="clickable" onclick={onclick.clone()}>{user.name.clone()}</td>
                <td class="clickable" onclick={onclick.clone()}>{user.email.clone()}</td>
                <td class="clickable" {onclick}>{company}</td>
                <td class="actions">
                    <button class="icon-btn" onclick={onedit}><PencilIcon /></button>
                    <button class="icon-btn danger" onclick={ondelete}><TrashIcon /></button>
                </td>
            </tr>
        }
    }
}
