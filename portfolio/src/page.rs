//! The portfolio page skeleton.
//!
//! Hosts that render their own markup can skip this; the behaviors only
//! rely on the ids and classes used here.

use pagedom::{Document, DomError, Element, Viewport};

use crate::contact::{FORM_ID, FieldId, SUCCESS_ID};

pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

pub const DEFAULT_HERO_TITLE: &str = "Crafting Digital Experiences";

const SECTION_HEIGHT: f64 = 800.0;
const NAVBAR_HEIGHT: f64 = 70.0;

fn navbar() -> Element {
    let links = SECTIONS.iter().map(|(id, label)| {
        Element::link(&format!("#{id}"), *label)
            .id(format!("link-{id}"))
            .class("nav-link")
    });

    Element::new("nav")
        .id("navbar")
        .class("navbar")
        .layout(0.0, NAVBAR_HEIGHT)
        .child(Element::link("#home", "Portfolio").id("brand").class("logo"))
        .child(Element::button("").id("navToggle").class("nav-toggle"))
        .child(Element::new("ul").id("navMenu").class("nav-menu").children(links))
}

fn section(index: usize, id: &str) -> Element {
    Element::new("section")
        .id(id)
        .class("section")
        .layout(index as f64 * SECTION_HEIGHT, SECTION_HEIGHT)
}

fn hero(title: &str) -> Element {
    section(0, "home")
        .class("hero")
        .child(Element::div().id("heroBackground").class("hero-background"))
        .child(
            Element::new("h1")
                .id("heroTitle")
                .class("hero-title")
                .text(title)
                .layout(300.0, 80.0),
        )
        .child(Element::link("#contact", "Let's talk").id("heroCta").class("btn"))
}

fn about() -> Element {
    section(1, "about").child(
        Element::div()
            .id("aboutText")
            .class("fade-in")
            .layout(SECTION_HEIGHT + 100.0, 400.0),
    )
}

fn services() -> Element {
    let top = 2.0 * SECTION_HEIGHT;
    let cards = ["Web Design", "Development", "Consulting", "Maintenance"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            Element::div()
                .id(format!("service-{i}"))
                .class("service-card")
                .class("fade-in")
                .text(name)
                .layout(top + 150.0 + i as f64 * 150.0, 120.0)
        });
    section(2, "services").children(cards)
}

fn portfolio() -> Element {
    let top = 3.0 * SECTION_HEIGHT;
    let items = (0..3).map(|i| {
        Element::div()
            .id(format!("project-{i}"))
            .class("portfolio-item")
            .class("fade-in")
            .layout(top + 150.0 + i as f64 * 200.0, 180.0)
    });
    section(3, "portfolio").children(items)
}

fn contact() -> Element {
    let mut form = Element::new("form").id(FORM_ID).class("contact-form");
    for field in FieldId::ALL {
        let control = match field {
            FieldId::Email => Element::input("email"),
            FieldId::Message => Element::textarea(),
            FieldId::Name | FieldId::Subject => Element::input("text"),
        };
        form = form
            .child(control.id(field.as_str()))
            .child(
                Element::new("span")
                    .id(field.error_id())
                    .class("error-message"),
            );
    }
    form = form.child(
        Element::button("Send Message")
            .id("submitBtn")
            .class("btn")
            .attr("type", "submit"),
    );

    section(4, "contact")
        .child(form)
        .child(
            Element::div()
                .id(SUCCESS_ID)
                .class("form-success")
                .style("display", "none"),
        )
}

fn footer() -> Element {
    Element::new("footer")
        .id("footer")
        .layout(5.0 * SECTION_HEIGHT, 200.0)
        .child(Element::new("span").id("year"))
}

/// Build the standard portfolio page.
pub fn build(viewport: Viewport, hero_title: &str) -> Result<Document, DomError> {
    Document::new(viewport)
        .with(navbar())?
        .with(hero(hero_title))?
        .with(about())?
        .with(services())?
        .with(portfolio())?
        .with(contact())?
        .with(footer())
}
