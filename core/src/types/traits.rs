use alloc::collections::BTreeMap;

use ecow::EcoString;

use crate::{Box, Vec};
use crate::types::types::{CommandArg, Kind, Ty};

/// Structural rewrite of a type tree from `Ty<V>` to `Ty<W>`.
///
/// Only variable leaves need a decision; the default `transform` rebuilds
/// every other node by recursing into its children. Implementors that need
/// to intercept other nodes override `transform` and delegate the rest to
/// `transform_default`.
pub trait TypeTransformer<V, W> {
    /// Rewrite one variable leaf.
    fn transform_var(&mut self, var: &V) -> Ty<W>;

    fn transform(&mut self, ty: &Ty<V>) -> Ty<W> {
        self.transform_default(ty)
    }

    fn transform_default(&mut self, ty: &Ty<V>) -> Ty<W> {
        match ty {
            Ty::Base(base) => Ty::Base(*base),
            Ty::Var(var) => self.transform_var(var),
            Ty::Function {
                optional,
                domain,
                codomain,
            } => Ty::Function {
                optional: self.transform_all(optional),
                domain: Box::new(self.transform(domain)),
                codomain: Box::new(self.transform(codomain)),
            },
            Ty::List(elem) => Ty::List(Box::new(self.transform(elem))),
            Ty::Ref(content) => Ty::Ref(Box::new(self.transform(content))),
            Ty::Product(components) => Ty::Product(self.transform_all(components)),
            Ty::Variant(args, id) => Ty::Variant(self.transform_all(args), id.clone()),
            Ty::Synonym(args, id, expansion) => Ty::Synonym(
                self.transform_all(args),
                id.clone(),
                Box::new(self.transform(expansion)),
            ),
            Ty::Record(fields) => Ty::Record(self.transform_fields(fields)),
            Ty::HorzCommand(args) => Ty::HorzCommand(self.transform_command_args(args)),
            Ty::VertCommand(args) => Ty::VertCommand(self.transform_command_args(args)),
            Ty::MathCommand(args) => Ty::MathCommand(self.transform_command_args(args)),
        }
    }

    fn transform_kind(&mut self, kind: &Kind<V>) -> Kind<W> {
        match kind {
            Kind::Universal => Kind::Universal,
            Kind::Record(fields) => Kind::Record(self.transform_fields(fields)),
        }
    }

    fn transform_all(&mut self, tys: &[Ty<V>]) -> Vec<Ty<W>> {
        tys.iter().map(|ty| self.transform(ty)).collect()
    }

    fn transform_fields(
        &mut self,
        fields: &BTreeMap<EcoString, Ty<V>>,
    ) -> BTreeMap<EcoString, Ty<W>> {
        fields
            .iter()
            .map(|(label, ty)| (label.clone(), self.transform(ty)))
            .collect()
    }

    fn transform_command_args(&mut self, args: &[CommandArg<V>]) -> Vec<CommandArg<W>> {
        args.iter()
            .map(|arg| match arg {
                CommandArg::Mandatory(ty) => CommandArg::Mandatory(self.transform(ty)),
                CommandArg::Optional(ty) => CommandArg::Optional(self.transform(ty)),
            })
            .collect()
    }
}
