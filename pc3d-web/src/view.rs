/// DOM construction for the configurator card
use pc3d_core::{
    button_style, categories, tab_trigger_style, ButtonVariant, Category, Interaction, Session,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

pub const TAB_ATTR: &str = "data-pc3d-tab";
pub const CATEGORY_ATTR: &str = "data-pc3d-category";
pub const OPTION_ATTR: &str = "data-pc3d-option";

const TAB_CLASS: &str = "pc3d-tab";
const ACTIVE_TAB_CLASS: &str = "pc3d-tab-active";

const VIEWER_HEIGHT: u32 = 500;
const DEFAULT_VIEWER_WIDTH: u32 = 800;

/// Elements the configurator repaints after mounting
pub struct Parts {
    pub canvas: HtmlCanvasElement,
    pub tab_list: Element,
    pub options_grid: Element,
}

fn element(document: &Document, tag: &str, style: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !style.is_empty() {
        el.set_attribute("style", style)?;
    }
    Ok(el)
}

fn option_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "pc3d-option-default",
        ButtonVariant::Outline => "pc3d-option-outline",
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        ACTIVE_TAB_CLASS
    } else {
        TAB_CLASS
    }
}

/// Resting and hover rules for every button the card renders. Disabled
/// buttons match the `:disabled` rules.
pub fn stylesheet() -> String {
    let mut css = String::new();
    for variant in [ButtonVariant::Default, ButtonVariant::Outline] {
        let class = option_class(variant);
        css.push_str(
            &button_style(variant, Interaction::Enabled).to_css_rules(&format!(".{class}")),
        );
        css.push_str(
            &button_style(variant, Interaction::Disabled)
                .to_css_rules(&format!(".{class}:disabled")),
        );
    }
    for active in [false, true] {
        css.push_str(&tab_trigger_style(active).to_css_rules(&format!(".{}", tab_class(active))));
    }
    css
}

/// Replace the container's contents with the viewer and the option card
pub fn build(document: &Document, container: &Element) -> Result<Parts, JsValue> {
    container.set_inner_html("");

    let sheet = document.create_element("style")?;
    sheet.set_text_content(Some(&stylesheet()));
    container.append_child(&sheet)?;

    let root = element(
        document,
        "div",
        "display:flex;flex-direction:column;max-width:1200px;margin:20px auto;gap:20px;",
    )?;

    let viewer = element(
        document,
        "div",
        "height:500px;background-color:#f4f4f4;border-radius:8px;overflow:hidden;",
    )?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let width = match container.client_width() {
        w if w > 0 => w.min(1200) as u32,
        _ => DEFAULT_VIEWER_WIDTH,
    };
    canvas.set_width(width);
    canvas.set_height(VIEWER_HEIGHT);
    canvas.set_attribute(
        "style",
        "display:block;width:100%;height:100%;touch-action:none;cursor:grab;",
    )?;
    viewer.append_child(&canvas)?;

    let card = element(
        document,
        "div",
        "background:white;border-radius:8px;box-shadow:0 2px 4px rgba(0,0,0,0.1);margin-bottom:1rem;",
    )?;
    let header = element(document, "div", "padding:1rem;border-bottom:1px solid #eee;")?;
    let title = element(document, "h2", "margin:0;font-size:1.25rem;font-weight:600;")?;
    title.set_text_content(Some("Product Configuration"));
    header.append_child(&title)?;

    let content = element(document, "div", "padding:1rem;")?;
    let tab_list = element(
        document,
        "div",
        "display:flex;border-bottom:1px solid #e5e7eb;margin-bottom:1rem;",
    )?;
    let options_grid = element(
        document,
        "div",
        "display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:1rem;margin-top:1rem;padding:1rem 0;",
    )?;
    content.append_child(&tab_list)?;
    content.append_child(&options_grid)?;

    card.append_child(&header)?;
    card.append_child(&content)?;
    root.append_child(&viewer)?;
    root.append_child(&card)?;
    container.append_child(&root)?;

    Ok(Parts {
        canvas,
        tab_list,
        options_grid,
    })
}

pub fn render_tabs(document: &Document, tab_list: &Element, session: &Session) -> Result<(), JsValue> {
    tab_list.set_inner_html("");
    for &category in categories() {
        let button = element(document, "button", "padding:0.5rem 1rem;")?;
        button.set_attribute("class", tab_class(session.tabs().is_active(category)))?;
        button.set_attribute(TAB_ATTR, category.id())?;
        button.set_text_content(Some(category.title()));
        tab_list.append_child(&button)?;
    }
    Ok(())
}

pub fn render_options(
    document: &Document,
    options_grid: &Element,
    session: &Session,
) -> Result<(), JsValue> {
    options_grid.set_inner_html("");
    let category = session.tabs().active();

    for entry in session.panel() {
        let button = element(
            document,
            "button",
            "padding:0.5rem 1rem;border-radius:4px;font-weight:500;display:inline-flex;\
             align-items:center;justify-content:center;gap:0.5rem;",
        )?;
        let variant = ButtonVariant::for_selection(entry.selected);
        button.set_attribute("class", option_class(variant))?;
        button.set_attribute(CATEGORY_ATTR, category.id())?;
        button.set_attribute(OPTION_ATTR, entry.option.id)?;

        if let Some(swatch) = entry.option.swatch {
            let dot = element(
                document,
                "span",
                &format!(
                    "width:1rem;height:1rem;border-radius:50%;border:1px solid #d1d5db;background:{swatch};"
                ),
            )?;
            button.append_child(&dot)?;
        }

        let text = document.create_element("div")?;
        let label = document.create_element("div")?;
        label.set_text_content(Some(entry.option.label));
        let description = document.create_element("small")?;
        description.set_text_content(Some(entry.option.description));
        text.append_child(&label)?;
        text.append_child(&description)?;
        button.append_child(&text)?;

        options_grid.append_child(&button)?;
    }
    Ok(())
}

/// What a click on `target` asks for, read from the nearest button's data
/// attributes. `Ok(None)` for clicks outside any configurator button.
pub fn event_for_click(target: &Element) -> Result<Option<pc3d_core::Event>, JsValue> {
    let Some(button) = target.closest("button")? else {
        return Ok(None);
    };

    if let Some(tab) = button.get_attribute(TAB_ATTR) {
        let category: Category = tab.parse().map_err(crate::to_js)?;
        return Ok(Some(pc3d_core::Event::ActivateTab(category)));
    }

    match (button.get_attribute(CATEGORY_ATTR), button.get_attribute(OPTION_ATTR)) {
        (Some(category), Some(option)) => {
            let category: Category = category.parse().map_err(crate::to_js)?;
            Ok(Some(pc3d_core::Event::select(category, option)))
        }
        _ => Ok(None),
    }
}
