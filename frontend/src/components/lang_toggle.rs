use log::info;
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    Ar,
    En,
}

impl Lang {
    pub fn toggled(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    /// Label on the toggle: names the language a click switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::Ar => "EN",
            Lang::En => "العربية",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lang::Ar => "برنامج التدريب الميداني - جامعة المملكة",
            Lang::En => "Field Training Program - Kingdom University",
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Lang::En
        } else {
            Lang::Ar
        }
    }
}

fn current_lang() -> Lang {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .and_then(|html| html.get_attribute("lang"))
        .map(|code| Lang::from_code(&code))
        .unwrap_or(Lang::Ar)
}

/// Only the document attributes and the title change; page text stays as is.
fn apply_lang(lang: Lang) {
    info!("Switching to {} language", lang.code());
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", lang.code());
        let _ = html.set_attribute("dir", lang.dir());
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force("english", lang == Lang::En);
    }
    document.set_title(lang.title());
}

#[function_component(LangToggle)]
pub fn lang_toggle() -> Html {
    let lang = use_state_eq(current_lang);

    let onclick = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| {
            let next = lang.toggled();
            apply_lang(next);
            lang.set(next);
        })
    };

    html! {
        <button id="lang-switch" class="lang-switch" onclick={onclick}>
            <i class="fas fa-globe"></i>
            <span>{lang.switch_label()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_returns_home() {
        assert_eq!(Lang::Ar.toggled(), Lang::En);
        assert_eq!(Lang::Ar.toggled().toggled(), Lang::Ar);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
    }

    #[test]
    fn label_names_the_other_language() {
        assert_eq!(Lang::Ar.switch_label(), "EN");
        assert_eq!(Lang::En.switch_label(), "العربية");
    }

    #[test]
    fn unknown_codes_fall_back_to_arabic() {
        assert_eq!(Lang::from_code("EN"), Lang::En);
        assert_eq!(Lang::from_code("fr"), Lang::Ar);
    }
}
