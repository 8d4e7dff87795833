//! Style sheet assembly
//!
//! Splits the registry's styles into the indexed component tables the
//! document's style part stores, without producing any markup.

use std::hash::Hash;

use ahash::AHashMap;

use super::number_format::builtin_id_for_code;
use super::{
    Alignment, BorderStyle, Color, FacetKind, FillStyle, FontStyle, NumberFormat, PatternType,
    Protection, Style, StyleRegistry, FIRST_CUSTOM_FORMAT_ID,
};

/// One cell format row: component ids plus inline alignment/protection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XfRecord {
    pub num_fmt_id: u32,
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub alignment: Option<Alignment>,
    pub protection: Option<Protection>,
    /// Slots the originating style sets explicitly
    pub applied: Vec<FacetKind>,
}

impl XfRecord {
    /// Whether the style set `kind` explicitly
    pub fn applies(&self, kind: FacetKind) -> bool {
        self.applied.contains(&kind)
    }
}

/// Indexed component tables for a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Custom number formats as `(id, code)`, ids from 164 upward
    pub num_fmts: Vec<(u32, String)>,
    pub fonts: Vec<FontStyle>,
    /// Index 0 is `none` and index 1 is `gray125`
    pub fills: Vec<FillStyle>,
    pub borders: Vec<BorderStyle>,
    /// One record per registry index, in index order
    pub cell_xfs: Vec<XfRecord>,
}

struct ComponentTable<T> {
    items: Vec<T>,
    ids: AHashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> ComponentTable<T> {
    fn with_reserved(reserved: impl IntoIterator<Item = T>) -> Self {
        let mut table = Self {
            items: Vec::new(),
            ids: AHashMap::new(),
        };
        for item in reserved {
            table.intern(&item);
        }
        table
    }

    fn intern(&mut self, item: &T) -> u32 {
        if let Some(&id) = self.ids.get(item) {
            return id;
        }
        let id = self.items.len() as u32;
        self.items.push(item.clone());
        self.ids.insert(item.clone(), id);
        id
    }
}

impl StyleSheet {
    /// Assemble the component tables for every style in `registry`
    pub fn build(registry: &StyleRegistry) -> Self {
        let mut fonts = ComponentTable::with_reserved([FontStyle::default()]);
        let mut fills = ComponentTable::with_reserved([
            FillStyle::None,
            FillStyle::pattern(PatternType::Gray125, Color::Auto, Color::Auto),
        ]);
        let mut borders = ComponentTable::with_reserved([BorderStyle::default()]);

        let mut custom_ids: AHashMap<&str, u32> = AHashMap::new();
        let mut num_fmts: Vec<(u32, String)> = Vec::new();
        let mut next_num_fmt_id = FIRST_CUSTOM_FORMAT_ID;

        let mut cell_xfs = Vec::with_capacity(registry.table_len());

        for (_, style) in registry.components() {
            let num_fmt_id = match &style.number_format {
                None => 0,
                Some(NumberFormat::Custom(code)) => match builtin_id_for_code(code) {
                    Some(id) => id,
                    None => *custom_ids.entry(code.as_str()).or_insert_with(|| {
                        let id = next_num_fmt_id;
                        next_num_fmt_id += 1;
                        num_fmts.push((id, code.clone()));
                        id
                    }),
                },
                Some(format) => format.builtin_id().unwrap_or(0),
            };

            let font_id = style.font.as_ref().map_or(0, |f| fonts.intern(f));
            let fill_id = style.fill.as_ref().map_or(0, |f| fills.intern(f));
            let border_id = style.border.as_ref().map_or(0, |b| borders.intern(b));

            cell_xfs.push(XfRecord {
                num_fmt_id,
                font_id,
                fill_id,
                border_id,
                alignment: style.alignment.clone(),
                protection: style.protection,
                applied: applied_slots(style),
            });
        }

        Self {
            num_fmts,
            fonts: fonts.items,
            fills: fills.items,
            borders: borders.items,
            cell_xfs,
        }
    }

    /// Record for a registry index
    pub fn xf(&self, index: u32) -> Option<&XfRecord> {
        self.cell_xfs.get(index as usize)
    }
}

fn applied_slots(style: &Style) -> Vec<FacetKind> {
    style.facets().map(|facet| facet.kind()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderLineStyle, StyleFacet};

    #[test]
    fn test_default_only() {
        let sheet = StyleSheet::build(&StyleRegistry::new());

        assert!(sheet.num_fmts.is_empty());
        assert_eq!(sheet.fonts, vec![FontStyle::default()]);
        assert_eq!(sheet.fills.len(), 2);
        assert_eq!(sheet.fills[0], FillStyle::None);
        assert_eq!(
            sheet.fills[1],
            FillStyle::pattern(PatternType::Gray125, Color::Auto, Color::Auto)
        );
        assert_eq!(sheet.borders, vec![BorderStyle::default()]);

        let xf = sheet.xf(0).unwrap();
        assert_eq!((xf.num_fmt_id, xf.font_id, xf.fill_id, xf.border_id), (0, 0, 0, 0));
        assert!(xf.applied.is_empty());
    }

    #[test]
    fn test_components_are_shared() {
        let mut registry = StyleRegistry::new();
        let bold = registry.register(&Style::new().bold(true)).unwrap();
        let bold_red = registry
            .register(&Style::new().bold(true).fill_color(Color::RED))
            .unwrap();
        let red = registry.register(&Style::new().fill_color(Color::RED)).unwrap();

        let sheet = StyleSheet::build(&registry);
        assert_eq!(sheet.cell_xfs.len(), 4);
        assert_eq!(sheet.fonts.len(), 2);
        assert_eq!(sheet.fills.len(), 3);

        let bold_xf = sheet.xf(bold).unwrap();
        let bold_red_xf = sheet.xf(bold_red).unwrap();
        let red_xf = sheet.xf(red).unwrap();
        assert_eq!(bold_xf.font_id, 1);
        assert_eq!(bold_red_xf.font_id, 1);
        assert_eq!(bold_red_xf.fill_id, 2);
        assert_eq!(red_xf.fill_id, 2);
        assert_eq!(red_xf.font_id, 0);
        assert!(red_xf.applies(FacetKind::Fill));
        assert!(!red_xf.applies(FacetKind::Font));
    }

    #[test]
    fn test_number_format_ids() {
        let mut registry = StyleRegistry::new();
        let custom = registry.register(&Style::new().number_format("0.000")).unwrap();
        let same_custom = registry
            .register(&Style::new().number_format("0.000").bold(true))
            .unwrap();
        let builtin_code = registry.register(&Style::new().number_format("0%")).unwrap();
        let builtin = registry
            .register(
                &Style::new().with_facet(StyleFacet::NumberFormat(NumberFormat::date_short())),
            )
            .unwrap();
        let second_custom = registry
            .register(&Style::new().number_format("yyyy-mm-dd"))
            .unwrap();

        let sheet = StyleSheet::build(&registry);
        assert_eq!(
            sheet.num_fmts,
            vec![(164, "0.000".to_string()), (165, "yyyy-mm-dd".to_string())]
        );
        assert_eq!(sheet.xf(custom).unwrap().num_fmt_id, 164);
        assert_eq!(sheet.xf(same_custom).unwrap().num_fmt_id, 164);
        assert_eq!(sheet.xf(builtin_code).unwrap().num_fmt_id, 9);
        assert_eq!(sheet.xf(builtin).unwrap().num_fmt_id, 14);
        assert_eq!(sheet.xf(second_custom).unwrap().num_fmt_id, 165);
    }

    #[test]
    fn test_explicit_none_fill_reuses_reserved_entry() {
        let mut registry = StyleRegistry::new();
        let index = registry
            .register(&Style::new().with_facet(StyleFacet::Fill(FillStyle::None)))
            .unwrap();
        let bordered = registry
            .register(
                &Style::new().border(BorderStyle::outline(BorderLineStyle::Thin, Color::Auto)),
            )
            .unwrap();

        let sheet = StyleSheet::build(&registry);
        assert_eq!(sheet.fills.len(), 2);
        assert_eq!(sheet.xf(index).unwrap().fill_id, 0);
        assert!(sheet.xf(index).unwrap().applies(FacetKind::Fill));
        assert_eq!(sheet.xf(bordered).unwrap().border_id, 1);
    }
}
