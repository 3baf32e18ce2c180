//! Order message formatting and the WhatsApp deep link.
//!
//! The message template is a wire contract: the recipient side is a human
//! reading WhatsApp, and the text (including the original template's
//! indentation and trailing spaces) must be reproduced exactly.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::Decimal;
use url::Url;

use crate::cart::CartLine;
use crate::checkout::{Checkout, DeliveryMode};
use crate::config::StoreConfig;

/// Characters left bare by JavaScript's `encodeURIComponent`: ASCII
/// alphanumerics plus `- _ . ! ~ * ' ( )`. Everything else, including all
/// non-ASCII bytes, is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Format the order message.
///
/// One comma-joined segment per cart line in insertion order, then either
/// the delivery address or the pickup acknowledgement, then the delivery
/// mode label and the total to exactly two decimal places.
#[must_use]
pub fn format_message(lines: &[CartLine], checkout: &Checkout) -> String {
    let items = lines
        .iter()
        .map(|line| {
            format!(
                "{} (quantidade : {}) - Observações: {}",
                line.product.name, line.quantity, line.observation
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let place = match checkout.delivery_mode {
        DeliveryMode::Delivery => format!(
            "Meu endereço é: {}, {}, {}, CEP: {}.",
            checkout.address.street,
            checkout.address.number,
            checkout.address.neighborhood,
            checkout.address.cep
        ),
        DeliveryMode::Pickup => "Vou retirar o pedido no local.".to_string(),
    };

    let total: Decimal = lines.iter().map(CartLine::line_total).sum();
    let mode = checkout.delivery_mode.as_str();

    format!(
        "\n    Olá! \n    Gostaria de encomendar os seguintes produtos: \n    {items}.\n    {place}\n    Opção de entrega: {mode}.\n    Valor total do pedido: R$ {total:.2}.\n  "
    )
}

/// Build the `wa.me` deep link carrying the order message.
///
/// The message is percent-encoded with an `encodeURIComponent`-equivalent
/// set and placed in the `text` query parameter. Opening the link is the
/// caller's job.
///
/// # Errors
///
/// Returns [`url::ParseError`] if the configured recipient id does not form
/// a valid URL (a validated [`StoreConfig`] cannot trigger this).
pub fn order_link(config: &StoreConfig, message: &str) -> Result<Url, url::ParseError> {
    let encoded = utf8_percent_encode(message, URI_COMPONENT);
    Url::parse(&format!(
        "https://wa.me/{}?text={encoded}",
        config.whatsapp_recipient
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;
    use crate::checkout::AddressField;
    use balcao_core::ProductId;

    fn cart_with_burgers() -> Cart {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(
            catalog.get(ProductId::new(1)).expect("product"),
            2,
            "sem cebola".to_string(),
        )
        .expect("add");
        cart
    }

    #[test]
    fn test_pickup_message_contents() {
        let cart = cart_with_burgers();
        let mut checkout = Checkout::default();
        checkout.set_delivery_mode(DeliveryMode::Pickup);

        let message = format_message(cart.lines(), &checkout);
        assert!(message.contains("Hamburguer (quantidade : 2) - Observações: sem cebola"));
        assert!(message.contains("Vou retirar o pedido no local."));
        assert!(message.contains("Opção de entrega: pickup."));
        assert!(message.contains("R$ 20.00"));
    }

    #[test]
    fn test_delivery_message_uses_address_verbatim() {
        let cart = cart_with_burgers();
        let mut checkout = Checkout::default();
        checkout.address.set(AddressField::Street, "Rua A".to_string());
        checkout.address.set(AddressField::Number, "12".to_string());
        checkout
            .address
            .set(AddressField::Neighborhood, "Centro".to_string());
        checkout.address.set(AddressField::Cep, "18020-002".to_string());

        let message = format_message(cart.lines(), &checkout);
        assert!(message.contains("Meu endereço é: Rua A, 12, Centro, CEP: 18020-002."));
        assert!(message.contains("Opção de entrega: delivery."));
    }

    #[test]
    fn test_empty_address_fields_render_as_empty_text() {
        let cart = cart_with_burgers();
        let checkout = Checkout::default();

        let message = format_message(cart.lines(), &checkout);
        assert!(message.contains("Meu endereço é: , , , CEP: ."));
    }

    #[test]
    fn test_full_message_is_byte_exact() {
        let cart = cart_with_burgers();
        let mut checkout = Checkout::default();
        checkout.set_delivery_mode(DeliveryMode::Pickup);

        let expected = "\n    Olá! \n    Gostaria de encomendar os seguintes produtos: \n    Hamburguer (quantidade : 2) - Observações: sem cebola.\n    Vou retirar o pedido no local.\n    Opção de entrega: pickup.\n    Valor total do pedido: R$ 20.00.\n  ";
        assert_eq!(format_message(cart.lines(), &checkout), expected);
    }

    #[test]
    fn test_lines_join_in_insertion_order() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(
            catalog.get(ProductId::new(3)).expect("product"),
            1,
            String::new(),
        )
        .expect("add");
        cart.add(
            catalog.get(ProductId::new(1)).expect("product"),
            1,
            String::new(),
        )
        .expect("add");

        let message = format_message(cart.lines(), &Checkout::default());
        let sushi = message.find("Sushi").expect("sushi present");
        let burger = message.find("Hamburguer").expect("burger present");
        assert!(sushi < burger);
        assert!(message.contains(
            "Sushi (quantidade : 1) - Observações: , Hamburguer (quantidade : 1) - Observações: "
        ));
    }

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        let encoded = utf8_percent_encode("Olá! (sem cebola) *~'", URI_COMPONENT).to_string();
        // Space -> %20 (never '+'), á -> UTF-8 bytes, and the JS-unreserved
        // marks stay bare.
        assert_eq!(encoded, "Ol%C3%A1!%20(sem%20cebola)%20*~'");
    }

    #[test]
    fn test_order_link_shape() {
        let config = StoreConfig::default();
        let cart = cart_with_burgers();
        let message = format_message(cart.lines(), &Checkout::default());

        let link = order_link(&config, &message).expect("valid link");
        assert_eq!(link.scheme(), "https");
        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/5511987361695");
        let text = link.as_str();
        assert!(text.contains("?text=%0A%20%20%20%20Ol%C3%A1!%20"));
    }
}
