use gold_forecast::{Field, Region, RenderTarget, Tone};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the forecast page shows, rebuilt by the reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    visible: HashSet<Region>,
    texts: HashMap<Field, String>,
    error_fields: HashSet<Field>,
    change_tone: Option<Tone>,
}

impl PageState {
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.contains(&region)
    }

    /// Text of `field`, or `placeholder` when nothing was written yet.
    pub fn text_or<'a>(&'a self, field: Field, placeholder: &'a str) -> &'a str {
        self.texts.get(&field).map(String::as_str).unwrap_or(placeholder)
    }

    pub fn is_error(&self, field: Field) -> bool {
        self.error_fields.contains(&field)
    }

    pub fn change_tone(&self) -> Option<Tone> {
        self.change_tone
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    SetVisible(Region, bool),
    SetText(Field, String),
    SetErrorText(Field, String),
    SetChangeTone(Tone),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Page action: {:?}", action);
        let mut next = (*self).clone();
        match action {
            PageAction::SetVisible(region, true) => {
                next.visible.insert(region);
            }
            PageAction::SetVisible(region, false) => {
                next.visible.remove(&region);
            }
            PageAction::SetText(field, text) => {
                next.error_fields.remove(&field);
                next.texts.insert(field, text);
            }
            PageAction::SetErrorText(field, text) => {
                next.error_fields.insert(field);
                next.texts.insert(field, text);
            }
            PageAction::SetChangeTone(tone) => next.change_tone = Some(tone),
        }
        Rc::new(next)
    }
}

/// Render target that feeds the page reducer.
#[derive(Clone)]
pub struct ReducerTarget {
    dispatcher: UseReducerDispatcher<PageState>,
}

impl ReducerTarget {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>) -> Self {
        Self { dispatcher }
    }
}

impl RenderTarget for ReducerTarget {
    fn set_visible(&self, region: Region, visible: bool) {
        self.dispatcher.dispatch(PageAction::SetVisible(region, visible));
    }

    fn set_text(&self, field: Field, text: &str) {
        self.dispatcher.dispatch(PageAction::SetText(field, text.to_string()));
    }

    fn set_error_text(&self, field: Field, text: &str) {
        self.dispatcher
            .dispatch(PageAction::SetErrorText(field, text.to_string()));
    }

    fn set_change_tone(&self, tone: Tone) {
        self.dispatcher.dispatch(PageAction::SetChangeTone(tone));
    }
}
