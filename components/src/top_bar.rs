use fluent::{FluentBundle, FluentResource};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use icons::{PlusIcon, SearchIcon};
use rolodex_sdk::state::{SortDir, SortKey};
use utils::tr;

use crate::constant::{ADD, ASC, COMPANY, DESC, EMAIL, NAME, SEARCH, SORT_BY};

/// toolbar above the user table: live search input, sort selectors and the
/// add button. owns no store state, everything goes out through callbacks.
#[derive(Properties, Clone, PartialEq)]
pub struct TopBarProps {
    pub search_callback: Callback<AttrValue>,
    pub plus_click: Callback<()>,
    pub sort_key_callback: Callback<SortKey>,
    pub sort_dir_callback: Callback<SortDir>,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub lang: LanguageType,
}

pub struct TopBar {
    search_node: NodeRef,
    i18n: FluentBundle<FluentResource>,
}

pub enum TopBarMsg {
    SearchInput(InputEvent),
    SortKeyChanged(Event),
    SortDirChanged(Event),
    PlusButtonClicked,
}

impl Component for TopBar {
    type Message = TopBarMsg;

    type Properties = TopBarProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            i18n: utils::create_bundle(Self::resource(ctx.props().lang)),
            search_node: NodeRef::default(),
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
            // recompute the derived view on every keystroke
            TopBarMsg::SearchInput(e) => {
                let input: HtmlInputElement = e.target_unchecked_into();
                ctx.props().search_callback.emit(input.value().into());
                false
            }
            TopBarMsg::SortKeyChanged(e) => {
                let select: HtmlSelectElement = e.target_unchecked_into();
                ctx.props()
                    .sort_key_callback
                    .emit(SortKey::from(select.value().as_str()));
                false
            }
            TopBarMsg::SortDirChanged(e) => {
                let select: HtmlSelectElement = e.target_unchecked_into();
                ctx.props()
                    .sort_dir_callback
                    .emit(SortDir::from(select.value().as_str()));
                false
            }
            TopBarMsg::PlusButtonClicked => {
                ctx.props().plus_click.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(TopBarMsg::SearchInput);
        let on_key_change = ctx.link().callback(TopBarMsg::SortKeyChanged);
        let on_dir_change = ctx.link().callback(TopBarMsg::SortDirChanged);
        let plus_click = ctx.link().callback(|_| TopBarMsg::PlusButtonClicked);
        let key = ctx.props().sort_key;
        let dir = ctx.props().sort_dir;
        html! {
            <div class="top-bar">
                <label class="search">
                    <SearchIcon />
                    <input
                        ref={self.search_node.clone()}
                        type="text"
                        placeholder={tr!(self.i18n, SEARCH)}
                        {oninput} />
                </label>
                <div class="sort">
                    <span class="sort-label">{tr!(self.i18n, SORT_BY)}</span>
                    <select onchange={on_key_change}>
                        <option value="name" selected={key == SortKey::Name}>{tr!(self.i18n, NAME)}</option>
                        <option value="email" selected={key == SortKey::Email}>{tr!(self.i18n, EMAIL)}</option>
                        <option value="company" selected={key == SortKey::Company}>{tr!(self.i18n, COMPANY)}</option>
                    </select>
                    <select onchange={on_dir_change}>
                        <option value="asc" selected={dir == SortDir::Asc}>{tr!(self.i18n, ASC)}</option>
                        <option value="desc" selected={dir == SortDir::Desc}>{tr!(self.i18n, DESC)}</option>
                    </select>
                </div>
                <button class="btn primary" onclick={plus_click}>
                    <PlusIcon />
                    {tr!(self.i18n, ADD)}
                </button>
            </div>
        }
    }
}

impl TopBar {
    fn resource(lang: LanguageType) -> &'static str {
        match lang {
            LanguageType::ZhCN => zh_cn::USERS,
            LanguageType::EnUS => en_us::USERS,
        }
    }
}
