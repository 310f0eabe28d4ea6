use super::super::Parser;
use super::{directive, name, selection};
use crate::ast::{FragmentDefinition, FragmentSpread, InlineFragment, Selection};
use crate::lexer::TokenKind;

/// The selection-position form: `FragmentSpread` or `InlineFragment`, both
/// starting with `...` (spec.md §4.3.2).
///
/// `FragmentSpread := '...' FragmentName Directives?`
/// `InlineFragment := '...' TypeCondition? Directives? SelectionSet`
/// `TypeCondition := 'on' NamedType`
/// `FragmentName := Name` (but not `on`).
pub(crate) fn fragment_selection<'s>(p: &mut Parser<'s>) -> Result<Selection<'s>, ()> {
    let dots = p.expect(TokenKind::Spread, "...")?;

    if p.at_keyword("on") {
        p.bump();
        let (type_condition, _) = name::name(p)?;
        let directives = directive::directives(p)?;
        let (selection_set, set_loc) = selection::selection_set(p)?;
        return Ok(Selection::InlineFragment(InlineFragment {
            location: p.loc(&dots).join(&set_loc),
            type_condition: Some(type_condition),
            directives,
            selection_set,
        }));
    }

    if p.at(TokenKind::Name) {
        let (fragment_name, name_loc) = name::name(p)?;
        let directives = directive::directives(p)?;
        let mut loc = p.loc(&dots).join(&name_loc);
        if let Some(last) = directives.last() {
            loc = loc.join(&last.location);
        }
        return Ok(Selection::FragmentSpread(FragmentSpread {
            location: loc,
            name: fragment_name,
            directives,
        }));
    }

    // Anonymous inline fragment: '...' Directives? SelectionSet.
    let directives = directive::directives(p)?;
    let (selection_set, set_loc) = selection::selection_set(p)?;
    Ok(Selection::InlineFragment(InlineFragment {
        location: p.loc(&dots).join(&set_loc),
        type_condition: None,
        directives,
        selection_set,
    }))
}

/// `FragmentDefinition := 'fragment' FragmentName 'on' NamedType
/// Directives? SelectionSet`. The leading `fragment` keyword has already
/// been confirmed present by the caller (`document::definition`).
pub(crate) fn fragment_definition<'s>(p: &mut Parser<'s>) -> Result<FragmentDefinition<'s>, ()> {
    let kw = p.bump(); // 'fragment'
    let (name, _) = name::name(p)?;
    if !p.at_keyword("on") {
        p.error(format!("Expected \"on\", found {}", p.describe_current()));
        return Err(());
    }
    p.bump();
    let (type_condition, _) = name::name(p)?;
    let directives = directive::directives(p)?;
    let (selection_set, set_loc) = selection::selection_set(p)?;
    Ok(FragmentDefinition {
        location: p.loc(&kw).join(&set_loc),
        name,
        type_condition,
        directives,
        selection_set,
    })
}
