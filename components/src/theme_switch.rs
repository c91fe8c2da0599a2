use std::rc::Rc;

use yew::prelude::*;
use yewdux::Dispatch;

use icons::{MoonIcon, SunIcon};
use rolodex_sdk::state::ThemeState;

/// light/dark toggle. the subscription fires once on mount, which also
/// applies the persisted preference to the document.
pub struct ThemeSwitch {
    theme: Rc<ThemeState>,
    _theme_dis: Dispatch<ThemeState>,
}

pub enum ThemeSwitchMsg {
    ThemeChanged(Rc<ThemeState>),
    Toggle,
}

impl Component for ThemeSwitch {
    type Message = ThemeSwitchMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _theme_dis =
            Dispatch::global().subscribe(ctx.link().callback(ThemeSwitchMsg::ThemeChanged));
        Self {
            theme: _theme_dis.get(),
            _theme_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ThemeSwitchMsg::ThemeChanged(theme) => {
                utils::set_theme(&theme.to_string());
                self.theme = theme;
                true
            }
            ThemeSwitchMsg::Toggle => {
                self._theme_dis.set(self.theme.toggled());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| ThemeSwitchMsg::Toggle);
        let icon = match *self.theme {
            ThemeState::Light => html!(<MoonIcon />),
            ThemeState::Dark => html!(<SunIcon />),
        };
        html! {
            <button class="icon-btn theme-switch" {onclick}>
                {icon}
            </button>
        }
    }
}
