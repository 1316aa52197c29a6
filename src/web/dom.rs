//! `web_sys::Element` 上的 `FieldElement` 实现

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventInit, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::fields::FieldElement;

#[derive(Clone)]
pub struct DomField(Element);

impl DomField {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    fn input(&self) -> Option<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>()
    }

    fn select(&self) -> Option<&HtmlSelectElement> {
        self.0.dyn_ref::<HtmlSelectElement>()
    }

    fn textarea(&self) -> Option<&HtmlTextAreaElement> {
        self.0.dyn_ref::<HtmlTextAreaElement>()
    }

    fn options(&self) -> Vec<HtmlOptionElement> {
        let Some(select) = self.select() else {
            return Vec::new();
        };
        (0..select.length())
            .filter_map(|i| select.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .collect()
    }
}

impl FieldElement for DomField {
    fn tag_name(&self) -> String {
        self.0.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    /// 表单控件取规范化后的 `type` 属性值 (缺省或非法的 input 类型为 `text`)
    fn control_type(&self) -> Option<String> {
        if let Some(input) = self.input() {
            return Some(input.type_());
        }
        if let Some(select) = self.select() {
            return Some(select.type_());
        }
        if let Some(textarea) = self.textarea() {
            return Some(textarea.type_());
        }
        self.0.get_attribute("type").filter(|t| !t.is_empty())
    }

    fn is_checked(&self) -> bool {
        self.input().is_some_and(|input| input.checked())
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.input() {
            input.set_checked(checked);
        }
    }

    fn value(&self) -> String {
        if let Some(input) = self.input() {
            input.value()
        } else if let Some(select) = self.select() {
            select.value()
        } else if let Some(textarea) = self.textarea() {
            textarea.value()
        } else {
            self.0.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.input() {
            input.set_value(value);
        } else if let Some(select) = self.select() {
            select.set_value(value);
        } else if let Some(textarea) = self.textarea() {
            textarea.set_value(value);
        }
    }

    fn option_values(&self) -> Vec<String> {
        self.options().iter().map(HtmlOptionElement::value).collect()
    }

    fn selected_values(&self) -> Vec<String> {
        self.options()
            .iter()
            .filter(|option| option.selected())
            .map(HtmlOptionElement::value)
            .collect()
    }

    fn set_selected_values(&self, values: &[String]) {
        for option in self.options() {
            option.set_selected(values.contains(&option.value()));
        }
    }

    fn notify_change(&self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("change", &init)
            .and_then(|event| self.0.dispatch_event(&event));
        if let Err(e) = dispatched {
            tracing::warn!("failed to dispatch change event: {:?}", e);
        }
    }

    fn descendants_with_attribute(&self, name: &str) -> Vec<Self> {
        let Ok(nodes) = self.0.query_selector_all(&format!("[{}]", name)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomField)
            .collect()
    }
}
