//! HTML parser for the provider directory page
//!
//! Each provider is an `li.result` element. Inside it the name sits in a
//! `.resultheader` element and the remaining fields are label/value pairs laid
//! out as a `.pseudodt` label followed by a `.pseudodd` value.

use crate::provider::Provider;
use crate::{DentistError, Result};
use scraper::{CaseSensitivity, ElementRef, Html, Selector};

/// Label preceding the address value
pub const ADDRESS_LABEL: &str = "Dirección:";

/// Label preceding the phone value
pub const PHONE_LABEL: &str = "Tel.:";

/// Parses every provider record out of the listing page
///
/// # Extraction Rules
///
/// - **name**: text of `.resultheader`, every whitespace run collapsed to one space
/// - **address**: the `.pseudodd` right after a `.pseudodt` containing `Dirección:`
/// - **phone**: the `.pseudodd` right after a `.pseudodt` containing `Tel.:`
///
/// A record missing a label gets an empty field.
///
/// # Returns
///
/// * `Ok(Vec<Provider>)` - At least one provider, in page order
/// * `Err(DentistError::NoProviders)` - Nothing matched; the raw page is logged
///
/// # Example
///
/// ```
/// use find_dentist::parse_providers;
///
/// let html = r#"<ul><li class="result">
///     <div class="resultheader">Dr. Juan Pérez</div>
///     <div class="pseudodt">Dirección:</div><div class="pseudodd">Av. Cabildo 2000</div>
///     <div class="pseudodt">Tel.:</div><div class="pseudodd">4781-0000</div>
/// </li></ul>"#;
/// let providers = parse_providers(html).unwrap();
/// assert_eq!(providers[0].address, "Av. Cabildo 2000");
/// ```
pub fn parse_providers(html: &str) -> Result<Vec<Provider>> {
    let document = Html::parse_document(html);

    let result_selector = selector("li.result")?;
    let header_selector = selector(".resultheader")?;
    let label_selector = selector(".pseudodt")?;

    let providers: Vec<Provider> = document
        .select(&result_selector)
        .map(|item| Provider {
            name: extract_name(item, &header_selector),
            address: extract_labelled(item, &label_selector, ADDRESS_LABEL),
            phone: extract_labelled(item, &label_selector, PHONE_LABEL),
        })
        .collect();

    if providers.is_empty() {
        // Usually means the page layout changed or the cookie stopped working
        tracing::error!("No providers found in listing page. Raw page follows:\n{}", html);
        return Err(DentistError::NoProviders);
    }

    tracing::info!("Parsed {} providers from listing page", providers.len());

    Ok(providers)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DentistError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Header text with all whitespace runs collapsed
fn extract_name(item: ElementRef<'_>, header_selector: &Selector) -> String {
    let text: String = item
        .select(header_selector)
        .flat_map(|header| header.text())
        .collect();

    collapse_whitespace(&text)
}

/// Text of the value element following the label that contains `label`
///
/// Multiple matches are concatenated.
fn extract_labelled(item: ElementRef<'_>, label_selector: &Selector, label: &str) -> String {
    let text: String = item
        .select(label_selector)
        .filter(|dt| dt.text().collect::<String>().contains(label))
        .filter_map(next_value_element)
        .flat_map(|dd| dd.text())
        .collect();

    text.trim().to_string()
}

/// The next element sibling, if it is a `.pseudodd` value
fn next_value_element(label: ElementRef<'_>) -> Option<ElementRef<'_>> {
    label
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|sibling| {
            sibling
                .value()
                .has_class("pseudodd", CaseSensitivity::CaseSensitive)
        })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
