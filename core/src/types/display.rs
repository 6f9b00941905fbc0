//! Canonical rendering of types and schemes.
//!
//! Variables are named in order of first occurrence (`'a`, `'b`, ...), so two
//! types that differ only in variable identities render identically. In
//! schemes, variables that stayed free are marked weak (`'_a`).

use alloc::string::ToString;

use crate::types::context::{TypeContext, TypeVarCell};
use crate::types::identity::{BoundId, FreeId};
use crate::types::scheme::Scheme;
use crate::types::types::{CommandArg, PolyVar, Ty};
use crate::{String, Vec};

// Precedences: a function needs parentheses anywhere but at the top, a
// product anywhere but at the top or inside a function.
const PREC_TOP: u8 = 0;
const PREC_PRODUCT: u8 = 1;
const PREC_ATOM: u8 = 2;

impl TypeContext {
    /// Render a mono type, following links.
    pub fn display_type(&self, ty: &Ty<FreeId>) -> String {
        let mut printer = Printer::new(self);
        let mut out = String::new();
        printer.ty(ty, PREC_TOP, &mut out);
        out
    }

    /// Render a scheme body.
    pub fn display_scheme(&self, scheme: &Scheme) -> String {
        let mut printer = Printer::new(self);
        let mut out = String::new();
        printer.ty(scheme.body(), PREC_TOP, &mut out);
        out
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VarKey {
    Free(FreeId),
    Bound(BoundId),
}

struct Printer<'c> {
    ctx: &'c TypeContext,
    names: Vec<VarKey>,
}

/// Variable leaves the printer knows how to render.
trait Leaf: Sized {
    fn print(&self, printer: &mut Printer<'_>, prec: u8, out: &mut String);
}

impl Leaf for FreeId {
    fn print(&self, printer: &mut Printer<'_>, prec: u8, out: &mut String) {
        let ctx = printer.ctx;
        match ctx.cell(*self) {
            TypeVarCell::Linked(linked) => printer.ty(linked, prec, out),
            TypeVarCell::Free(_) => {
                out.push('\'');
                printer.var_name(VarKey::Free(*self), out);
            }
        }
    }
}

impl Leaf for PolyVar {
    fn print(&self, printer: &mut Printer<'_>, prec: u8, out: &mut String) {
        match *self {
            PolyVar::Bound(id) => {
                out.push('\'');
                printer.var_name(VarKey::Bound(id), out);
            }
            PolyVar::StillFree(id) => {
                let ctx = printer.ctx;
                match ctx.cell(id) {
                    TypeVarCell::Linked(linked) => printer.ty(linked, prec, out),
                    TypeVarCell::Free(_) => {
                        out.push_str("'_");
                        printer.var_name(VarKey::Free(id), out);
                    }
                }
            }
        }
    }
}

impl<'c> Printer<'c> {
    fn new(ctx: &'c TypeContext) -> Self {
        Printer {
            ctx,
            names: Vec::new(),
        }
    }

    fn var_name(&mut self, key: VarKey, out: &mut String) {
        let index = match self.names.iter().position(|k| *k == key) {
            Some(index) => index,
            None => {
                self.names.push(key);
                self.names.len() - 1
            }
        };
        let letter = (b'a' + (index % 26) as u8) as char;
        out.push(letter);
        if index >= 26 {
            out.push_str(&(index / 26).to_string());
        }
    }

    fn ty<V: Leaf>(&mut self, ty: &Ty<V>, prec: u8, out: &mut String) {
        match ty {
            Ty::Base(base) => out.push_str(base.name()),
            Ty::Var(var) => var.print(self, prec, out),
            Ty::Function {
                optional,
                domain,
                codomain,
            } => {
                let open = prec > PREC_TOP;
                if open {
                    out.push('(');
                }
                for opt in optional {
                    self.ty(opt, PREC_PRODUCT, out);
                    out.push_str(" ?-> ");
                }
                self.ty(domain, PREC_PRODUCT, out);
                out.push_str(" -> ");
                self.ty(codomain, PREC_TOP, out);
                if open {
                    out.push(')');
                }
            }
            Ty::List(elem) => {
                self.ty(elem, PREC_ATOM, out);
                out.push_str(" list");
            }
            Ty::Ref(content) => {
                self.ty(content, PREC_ATOM, out);
                out.push_str(" ref");
            }
            Ty::Product(components) => {
                let open = prec > PREC_PRODUCT;
                if open {
                    out.push('(');
                }
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" * ");
                    }
                    self.ty(component, PREC_ATOM, out);
                }
                if open {
                    out.push(')');
                }
            }
            Ty::Variant(args, id) | Ty::Synonym(args, id, _) => {
                self.type_args(args, out);
                out.push_str(id.name());
            }
            Ty::Record(fields) => {
                out.push_str("(|");
                for (i, (label, field)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    out.push(' ');
                    out.push_str(label);
                    out.push_str(" : ");
                    self.ty(field, PREC_TOP, out);
                }
                out.push_str(" |)");
            }
            Ty::HorzCommand(args) => self.command(args, "inline-cmd", out),
            Ty::VertCommand(args) => self.command(args, "block-cmd", out),
            Ty::MathCommand(args) => self.command(args, "math-cmd", out),
        }
    }

    fn type_args<V: Leaf>(&mut self, args: &[Ty<V>], out: &mut String) {
        match args {
            [] => {}
            [arg] => {
                self.ty(arg, PREC_ATOM, out);
                out.push(' ');
            }
            _ => {
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.ty(arg, PREC_TOP, out);
                }
                out.push_str(") ");
            }
        }
    }

    fn command<V: Leaf>(&mut self, args: &[CommandArg<V>], name: &str, out: &mut String) {
        out.push('[');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            self.ty(arg.ty(), PREC_TOP, out);
            if let CommandArg::Optional(_) = arg {
                out.push('?');
            }
        }
        out.push_str("] ");
        out.push_str(name);
    }
}
