use super::super::Parser;
use super::name;
use crate::ast::Type;
use crate::lexer::TokenKind;

/// `Type := NamedType | ListType | NonNullType`.
///
/// `NonNullType` is not its own recursive alternative in this
/// implementation; instead a trailing `!` wraps whatever `NamedType` or
/// `ListType` was just parsed, which structurally prevents `NonNull` from
/// ever wrapping another `NonNull` (spec.md §3.4 invariant 6 — there is no
/// second `!` to consume once the first has been).
pub(crate) fn ty<'s>(p: &mut Parser<'s>) -> Result<Type<'s>, ()> {
    let inner = if p.at(TokenKind::BracketL) {
        let open = p.bump();
        let of_type = ty(p)?;
        let close = p.expect(TokenKind::BracketR, "]")?;
        Type::List {
            location: p.loc(&open).join(&p.loc(&close)),
            of_type: Box::new(of_type),
        }
    } else {
        let (name, loc) = name::name(p)?;
        Type::Named { location: loc, name }
    };

    if p.at(TokenKind::Bang) {
        let bang = p.bump();
        let loc = inner.location().join(&p.loc(&bang));
        Ok(Type::NonNull {
            location: loc,
            of_type: Box::new(inner),
        })
    } else {
        Ok(inner)
    }
}
