use log::error;
use web_sys::HtmlElement;
use yew::NodeRef;

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        error!("Failed to set {} on element: {:?}", property, e);
    }
}

/// Sets a style property on the referenced element, if it is mounted.
pub fn set_node_style(node: &NodeRef, property: &str, value: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        set_style(&element, property, value);
    }
}
