//! Contact cards: slot-composed cards for displaying a contact.
//!
//! Both card types are generic over their slots. Each offers two
//! construction paths: a fully generic one taking caller-built blocks, and a
//! `standard` one that substitutes the library defaults ([`CardHeader`],
//! [`ContactFooter`]) built from the same field values a custom builder
//! would receive. The card body only ever sees [`CardBlock`]s, so the two
//! paths are indistinguishable at the container boundary.

use std::any::Any;

use crate::cards::buttons::{AddressButton, ContactButton};
use crate::cards::card::{compose, content_width, frame_height, stacked_height, BLOCK_GAP};
use crate::cards::header::CardHeader;
use crate::cards::instructions::Instructions;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::{Environment, SizeCategory};
use crate::widget::traits::CardBlock;

// ---------------------------------------------------------------------------
// ContactButtonRow
// ---------------------------------------------------------------------------

/// The call / message / e-mail button group of a contact card footer.
///
/// Below [`SizeCategory::ExtraLarge`] the buttons sit side by side; at that
/// category and above they stack vertically so enlarged text keeps room to
/// breathe. The threshold comparison is the only place the row consults the
/// size scale.
pub struct ContactButtonRow {
    call: Option<ContactButton>,
    message: Option<ContactButton>,
    email: Option<ContactButton>,
}

impl ContactButtonRow {
    /// Create a row from the optional contact buttons.
    pub fn new(
        call: Option<ContactButton>,
        message: Option<ContactButton>,
        email: Option<ContactButton>,
    ) -> Self {
        Self {
            call,
            message,
            email,
        }
    }

    /// The present buttons, in display order.
    pub fn buttons(&self) -> Vec<&ContactButton> {
        [&self.call, &self.message, &self.email]
            .into_iter()
            .filter_map(|b| b.as_ref())
            .collect()
    }

    fn stacks_vertically(env: &Environment) -> bool {
        env.size_category >= SizeCategory::ExtraLarge
    }
}

impl CardBlock for ContactButtonRow {
    fn block_type(&self) -> &str {
        "ContactButtonRow"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let buttons = self.buttons();
        let n = buttons.len() as i32;
        if n == 0 {
            return 0;
        }
        if Self::stacks_vertically(env) {
            buttons.iter().map(|b| b.height(width, env)).sum()
        } else {
            buttons
                .iter()
                .map(|b| b.height(width, env))
                .max()
                .unwrap_or(0)
        }
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let buttons = self.buttons();
        let n = buttons.len() as i32;
        if n == 0 || region.is_empty() {
            return Vec::new();
        }

        let mut strips = Vec::new();
        if Self::stacks_vertically(env) {
            let mut offset = 0;
            for button in buttons {
                let h = button.height(region.width, env);
                let band = region.band(offset, h);
                if band.is_empty() {
                    break;
                }
                strips.extend(button.render(band, env));
                offset += h;
            }
        } else {
            // Side by side with one column of separation; the last button
            // absorbs the rounding remainder.
            let gaps = n - 1;
            let each = (region.width - gaps) / n;
            if each <= 0 {
                return Vec::new();
            }
            let mut x = region.x;
            for (i, button) in buttons.iter().enumerate() {
                let w = if i as i32 == n - 1 {
                    region.right() - x
                } else {
                    each
                };
                let slot = Region::new(x, region.y, w, region.height);
                strips.extend(button.render(slot, env));
                x += w + 1;
            }
        }
        strips
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// ContactFooter
// ---------------------------------------------------------------------------

/// The library-standard contact card footer: the button row above an
/// address block.
pub struct ContactFooter {
    buttons: ContactButtonRow,
    address: AddressButton,
}

impl ContactFooter {
    /// Create a footer from a button row and an address block.
    pub fn new(buttons: ContactButtonRow, address: AddressButton) -> Self {
        Self { buttons, address }
    }

    /// The button row.
    pub fn buttons(&self) -> &ContactButtonRow {
        &self.buttons
    }

    /// The address block.
    pub fn address(&self) -> &AddressButton {
        &self.address
    }
}

impl CardBlock for ContactFooter {
    fn block_type(&self) -> &str {
        "ContactFooter"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let row_h = self.buttons.height(width, env);
        let addr_h = self.address.height(width, env);
        if row_h > 0 {
            row_h + BLOCK_GAP + addr_h
        } else {
            addr_h
        }
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let mut strips = Vec::new();
        let row_h = self.buttons.height(region.width, env);
        let mut offset = 0;
        if row_h > 0 {
            strips.extend(self.buttons.render(region.band(0, row_h), env));
            offset = row_h + BLOCK_GAP;
        }
        let addr_h = self.address.height(region.width, env);
        let band = region.band(offset, addr_h);
        if !band.is_empty() {
            strips.extend(self.address.render(band, env));
        }
        strips
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// SimpleContactCard
// ---------------------------------------------------------------------------

/// A card that displays a contact as a single header slot.
///
/// Generic over the header type; [`SimpleContactCard::standard`] fixes the
/// slot to the default [`CardHeader`].
pub struct SimpleContactCard<H: CardBlock = CardHeader> {
    header: H,
}

impl<H: CardBlock + 'static> SimpleContactCard<H> {
    /// Create a card around a caller-built header block.
    pub fn new(header: H) -> Self {
        Self { header }
    }

    /// The header slot.
    pub fn header(&self) -> &H {
        &self.header
    }
}

impl SimpleContactCard {
    /// Create a card with the default header, built from the same values a
    /// custom header would receive. Absent values render as empty text.
    pub fn standard(title: impl Into<String>, detail: Option<String>) -> Self {
        Self::new(CardHeader::new(title).with_detail_opt(detail))
    }
}

impl<H: CardBlock + 'static> CardBlock for SimpleContactCard<H> {
    fn block_type(&self) -> &str {
        "SimpleContactCard"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        let blocks: [&dyn CardBlock; 1] = [&self.header];
        frame_height(stacked_height(&blocks, content_width(width), env))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        let blocks: [&dyn CardBlock; 1] = [&self.header];
        compose(&blocks, region, env)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// DetailedContactCard
// ---------------------------------------------------------------------------

/// A card that displays a contact with header, instructions, and footer.
///
/// Generic over both slots; [`DetailedContactCard::standard`] fixes them to
/// the defaults: a [`CardHeader`] with a divider, and a [`ContactFooter`]
/// with the button row and address block.
pub struct DetailedContactCard<H: CardBlock = CardHeader, F: CardBlock = ContactFooter> {
    header: H,
    instructions: Option<Instructions>,
    footer: F,
}

impl<H: CardBlock + 'static, F: CardBlock + 'static> DetailedContactCard<H, F> {
    /// Create a card around caller-built header and footer blocks.
    pub fn new(instructions: Option<String>, header: H, footer: F) -> Self {
        Self {
            header,
            instructions: instructions.map(Instructions::new),
            footer,
        }
    }

    /// The header slot.
    pub fn header(&self) -> &H {
        &self.header
    }

    /// The footer slot.
    pub fn footer(&self) -> &F {
        &self.footer
    }

    fn blocks(&self) -> Vec<&dyn CardBlock> {
        let mut blocks: Vec<&dyn CardBlock> = vec![&self.header];
        if let Some(instructions) = &self.instructions {
            blocks.push(instructions);
        }
        blocks.push(&self.footer);
        blocks
    }
}

impl DetailedContactCard {
    /// Create a card with the default header and footer, built from the
    /// same values custom slots would receive.
    #[allow(clippy::too_many_arguments)]
    pub fn standard(
        title: impl Into<String>,
        detail: Option<String>,
        instructions: Option<String>,
        icon: Option<char>,
        call: Option<ContactButton>,
        message: Option<ContactButton>,
        email: Option<ContactButton>,
        address: AddressButton,
    ) -> Self {
        let mut header = CardHeader::new(title)
            .with_detail_opt(detail)
            .with_divider();
        if let Some(icon) = icon {
            header = header.with_icon(icon);
        }
        let footer = ContactFooter::new(ContactButtonRow::new(call, message, email), address);
        Self::new(instructions, header, footer)
    }
}

impl<H: CardBlock + 'static, F: CardBlock + 'static> CardBlock for DetailedContactCard<H, F> {
    fn block_type(&self) -> &str {
        "DetailedContactCard"
    }

    fn height(&self, width: i32, env: &Environment) -> i32 {
        frame_height(stacked_height(&self.blocks(), content_width(width), env))
    }

    fn render(&self, region: Region, env: &Environment) -> Vec<Strip> {
        compose(&self.blocks(), region, env)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment::default()
    }

    fn accessibility_env() -> Environment {
        Environment::default().with_size_category(SizeCategory::AccessibilityMedium)
    }

    fn three_buttons() -> ContactButtonRow {
        ContactButtonRow::new(
            Some(ContactButton::new("Call", None)),
            Some(ContactButton::new("Message", None)),
            Some(ContactButton::new("E-mail", None)),
        )
    }

    // -----------------------------------------------------------------------
    // ContactButtonRow
    // -----------------------------------------------------------------------

    #[test]
    fn row_height_horizontal_below_threshold() {
        let row = three_buttons();
        assert_eq!(row.height(30, &env()), 3);
    }

    #[test]
    fn row_height_vertical_at_threshold() {
        let row = three_buttons();
        let e = Environment::default().with_size_category(SizeCategory::ExtraLarge);
        assert_eq!(row.height(30, &e), 9);
    }

    #[test]
    fn orientation_flips_exactly_at_extra_large() {
        let row = three_buttons();
        for cat in crate::style::ORDER {
            let e = Environment::default().with_size_category(cat);
            let expected = if cat < SizeCategory::ExtraLarge { 3 } else { 9 };
            assert_eq!(row.height(30, &e), expected, "at {cat:?}");
        }
    }

    #[test]
    fn row_empty_has_zero_height() {
        let row = ContactButtonRow::new(None, None, None);
        assert_eq!(row.height(30, &env()), 0);
        assert!(row.render(Region::new(0, 0, 30, 3), &env()).is_empty());
    }

    #[test]
    fn row_renders_buttons_side_by_side() {
        let row = three_buttons();
        let strips = row.render(Region::new(0, 0, 32, 3), &env());
        // Three buttons, three strips each.
        assert_eq!(strips.len(), 9);
        // (32 - 2) / 3 = 10 per slot; middle rows start at 0, 11, 22.
        let mut middles: Vec<i32> = strips
            .iter()
            .filter(|s| s.y == 1)
            .map(|s| s.x_offset)
            .collect();
        middles.sort_unstable();
        assert_eq!(middles, vec![0, 11, 22]);
    }

    #[test]
    fn row_renders_buttons_stacked_in_accessibility() {
        let row = three_buttons();
        let strips = row.render(Region::new(0, 0, 32, 9), &accessibility_env());
        // Middle rows of the three stacked buttons at y = 1, 4, 7.
        for y in [1, 4, 7] {
            assert!(
                strips.iter().any(|s| s.y == y && s.width() == 32),
                "full-width button row at y={y}"
            );
        }
    }

    #[test]
    fn row_skips_absent_buttons() {
        let row = ContactButtonRow::new(Some(ContactButton::new("Call", None)), None, None);
        assert_eq!(row.buttons().len(), 1);
        let strips = row.render(Region::new(0, 0, 30, 3), &env());
        // One full-width button.
        assert_eq!(strips.len(), 3);
        assert_eq!(strips[1].width(), 30);
    }

    // -----------------------------------------------------------------------
    // ContactFooter
    // -----------------------------------------------------------------------

    #[test]
    fn footer_stacks_row_above_address() {
        let footer = ContactFooter::new(
            three_buttons(),
            AddressButton::new("Address", "12 Main St", None),
        );
        let h = footer.height(30, &env());
        // 3 (row) + 1 (gap) + 4 (address).
        assert_eq!(h, 8);

        let strips = footer.render(Region::new(0, 0, 30, h), &env());
        assert!(strips.iter().any(|s| s.y <= 2));
        assert!(strips.iter().any(|s| s.y >= 4));
    }

    #[test]
    fn footer_without_buttons_is_just_address() {
        let footer = ContactFooter::new(
            ContactButtonRow::new(None, None, None),
            AddressButton::new("Address", "12 Main St", None),
        );
        assert_eq!(footer.height(30, &env()), 4);
    }

    // -----------------------------------------------------------------------
    // SimpleContactCard — slot interchangeability
    // -----------------------------------------------------------------------

    #[test]
    fn standard_and_custom_paths_render_identically() {
        let standard = SimpleContactCard::standard("Jane", Some("Nurse".to_owned()));
        let custom = SimpleContactCard::new(CardHeader::new("Jane").with_detail("Nurse"));

        let region = Region::new(0, 0, 30, 6);
        assert_eq!(standard.height(30, &env()), custom.height(30, &env()));
        assert_eq!(standard.render(region, &env()), custom.render(region, &env()));
    }

    #[test]
    fn simple_card_accepts_arbitrary_header_type() {
        let card = SimpleContactCard::new(Instructions::new("just text"));
        let region = Region::new(0, 0, 30, 5);
        let strips = card.render(region, &env());
        assert!(!strips.is_empty());
        assert_eq!(card.header().text(), "just text");
    }

    #[test]
    fn standard_with_absent_values_renders_empty_text() {
        let card = SimpleContactCard::standard("", None);
        let h = card.height(30, &env());
        assert_eq!(h, 4 + 1);
        let strips = card.render(Region::new(0, 0, 30, h), &env());
        assert!(!strips.is_empty());
    }

    // -----------------------------------------------------------------------
    // DetailedContactCard
    // -----------------------------------------------------------------------

    #[test]
    fn detailed_standard_builds_default_slots() {
        let card = DetailedContactCard::standard(
            "Jane Appleseed",
            Some("Family Practice".to_owned()),
            Some("Call ahead for same-day appointments.".to_owned()),
            Some('☺'),
            Some(ContactButton::new("Call", None)),
            Some(ContactButton::new("Message", None)),
            Some(ContactButton::new("E-mail", None)),
            AddressButton::new("Address", "12 Main Street", None),
        );

        assert_eq!(card.header().title(), "Jane Appleseed");
        assert_eq!(card.footer().buttons().buttons().len(), 3);

        let h = card.height(40, &env());
        let strips = card.render(Region::new(0, 0, 40, h), &env());
        assert!(!strips.is_empty());
        // Header divider rule appears within the card.
        assert!(strips.iter().any(|s| s.cells.iter().any(|c| c.ch == '─')));
    }

    #[test]
    fn detailed_generic_slots_compose() {
        let card = DetailedContactCard::new(
            Some("instructions".to_owned()),
            Instructions::new("custom header"),
            Instructions::new("custom footer"),
        );
        let h = card.height(30, &env());
        let strips = card.render(Region::new(0, 0, 30, h), &env());
        assert!(!strips.is_empty());
        assert_eq!(card.block_type(), "DetailedContactCard");
    }

    #[test]
    fn detailed_height_grows_in_accessibility_sizes() {
        let make = || {
            DetailedContactCard::standard(
                "Jane",
                None,
                None,
                None,
                Some(ContactButton::new("Call", None)),
                Some(ContactButton::new("Message", None)),
                Some(ContactButton::new("E-mail", None)),
                AddressButton::new("Address", "12 Main Street", None),
            )
        };
        let compact = make().height(40, &env());
        let enlarged = make().height(40, &accessibility_env());
        assert!(enlarged > compact);
    }
}
