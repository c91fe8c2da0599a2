use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::Dispatch;

use components::add_user::AddUser;
use components::edit_user::EditUser;
use components::top_bar::TopBar;
use components::user_table::UserTable;
use i18n::{en_us, zh_cn, LanguageType};
use icons::LoadingIcon;
use rolodex_sdk::api::{self, AbortHandle};
use rolodex_sdk::model::notification::Notification;
use rolodex_sdk::model::user::{User, UserDraft};
use rolodex_sdk::state::{
    I18nState, LoadStatus, Notify, SortDir, SortKey, UsersState,
};
use utils::tr;

/// the list view: search, sort, add, quick-edit and delete on top of the
/// session's user store
pub struct Users {
    users: Rc<UsersState>,
    query: AttrValue,
    sort_key: SortKey,
    sort_dir: SortDir,
    show_add: bool,
    edit_target: Option<User>,
    lang: LanguageType,
    i18n: FluentBundle<FluentResource>,
    abort: AbortHandle,
    _users_dis: Dispatch<UsersState>,
    _lang_dis: Dispatch<I18nState>,
}

pub enum UsersMsg {
    UsersStateChanged(Rc<UsersState>),
    I18nStateChanged(Rc<I18nState>),
    Search(AttrValue),
    SortKeyChanged(SortKey),
    SortDirChanged(SortDir),
    ShowAdd,
    CloseAdd,
    Add(UserDraft),
    ShowEdit(User),
    CloseEdit,
    Edit(UserDraft),
    Delete(i64),
}

impl Component for Users {
    type Message = UsersMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _users_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(UsersMsg::UsersStateChanged));
        let _lang_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(UsersMsg::I18nStateChanged));
        let lang = _lang_dis.get().lang;
        let abort = AbortHandle::default();
        Self::load(&_users_dis, &abort);
        Self {
            users: _users_dis.get(),
            query: AttrValue::default(),
            sort_key: SortKey::default(),
            sort_dir: SortDir::default(),
            show_add: false,
            edit_target: None,
            lang,
            i18n: utils::create_bundle(Self::resource(lang)),
            abort,
            _users_dis,
            _lang_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UsersMsg::UsersStateChanged(state) => {
                self.users = state;
                true
            }
            UsersMsg::I18nStateChanged(state) => {
                self.lang = state.lang;
                self.i18n = utils::create_bundle(Self::resource(state.lang));
                true
            }
            UsersMsg::Search(query) => {
                self.query = query;
                true
            }
            UsersMsg::SortKeyChanged(key) => {
                self.sort_key = key;
                true
            }
            UsersMsg::SortDirChanged(dir) => {
                self.sort_dir = dir;
                true
            }
            UsersMsg::ShowAdd => {
                self.show_add = true;
                true
            }
            UsersMsg::CloseAdd => {
                self.show_add = false;
                true
            }
            UsersMsg::Add(draft) => {
                self._users_dis.reduce_mut(|s| {
                    s.add(draft);
                });
                Notification::success(tr!(self.i18n, "added")).notify();
                self.show_add = false;
                true
            }
            UsersMsg::ShowEdit(user) => {
                self.edit_target = Some(user);
                true
            }
            UsersMsg::CloseEdit => {
                self.edit_target = None;
                true
            }
            UsersMsg::Edit(draft) => {
                if let Some(user) = self.edit_target.take() {
                    let updated = draft.apply_to(&user);
                    self._users_dis.reduce_mut(|s| s.update(updated));
                    Notification::success(tr!(self.i18n, "updated")).notify();
                }
                true
            }
            UsersMsg::Delete(id) => {
                self._users_dis.reduce_mut(|s| s.remove(id));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match self.users.status {
            LoadStatus::Loading => html! {
                <div class="loading"><LoadingIcon />{tr!(self.i18n, "loading")}</div>
            },
            // the banner sits above the table, which stays interactive with
            // whatever the store still holds
            LoadStatus::Failed => {
                let error = self.users.error.clone().unwrap_or_default();
                html! {
                    <>
                        <div class="error-banner">{error}</div>
                        {self.render_table(ctx)}
                    </>
                }
            }
            LoadStatus::Idle | LoadStatus::Succeeded => self.render_table(ctx),
        };
        let add_modal = if self.show_add {
            html! {
                <AddUser
                    close={ctx.link().callback(|_| UsersMsg::CloseAdd)}
                    submit={ctx.link().callback(UsersMsg::Add)}
                    lang={self.lang} />
            }
        } else {
            html!()
        };
        let edit_modal = match &self.edit_target {
            Some(user) => html! {
                <EditUser
                    user={user.clone()}
                    close={ctx.link().callback(|_| UsersMsg::CloseEdit)}
                    submit={ctx.link().callback(UsersMsg::Edit)}
                    lang={self.lang} />
            },
            None => html!(),
        };
        html! {
            <div class="users-page">
                <h2 class="page-title">{tr!(self.i18n, "title")}</h2>
                <TopBar
                    search_callback={ctx.link().callback(UsersMsg::Search)}
                    plus_click={ctx.link().callback(|_| UsersMsg::ShowAdd)}
                    sort_key_callback={ctx.link().callback(UsersMsg::SortKeyChanged)}
                    sort_dir_callback={ctx.link().callback(UsersMsg::SortDirChanged)}
                    sort_key={self.sort_key}
                    sort_dir={self.sort_dir}
                    lang={self.lang} />
                {content}
                {add_modal}
                {edit_modal}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.abort.abort();
    }
}

impl Users {
    fn render_table(&self, ctx: &Context<Self>) -> Html {
        let rows = self.users.select(&self.query, self.sort_key, self.sort_dir);
        html! {
            <UserTable
                users={rows}
                edit={ctx.link().callback(UsersMsg::ShowEdit)}
                delete={ctx.link().callback(UsersMsg::Delete)}
                lang={self.lang} />
        }
    }

    fn resource(lang: LanguageType) -> &'static str {
        match lang {
            LanguageType::ZhCN => zh_cn::USERS,
            LanguageType::EnUS => en_us::USERS,
        }
    }

    /// one-shot session load; a duplicate trigger while the store is not
    /// idle does nothing
    fn load(dispatch: &Dispatch<UsersState>, abort: &AbortHandle) {
        if dispatch.get().status != LoadStatus::Idle {
            return;
        }
        dispatch.reduce_mut(UsersState::begin_load);
        let abort = abort.clone();
        spawn_local(async move {
            let result = api::users().fetch_all().await;
            if abort.is_aborted() {
                log::debug!("user load finished after view teardown, dropping result");
                return;
            }
            let dispatch = Dispatch::<UsersState>::global();
            match result {
                Ok(users) => dispatch.reduce_mut(|s| s.complete_load(users)),
                Err(err) => {
                    log::error!("failed to load users: {}", err);
                    Notification::error(err.to_string()).notify();
                    dispatch.reduce_mut(|s| s.fail_load(err));
                }
            }
        });
    }
}
