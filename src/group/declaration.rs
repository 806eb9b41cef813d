use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use crate::group::{DEFAULT_KEY, spec::join};

/// Group membership of a test unit or of a whole module.
///
/// `key` names the external value that enables the groups, `groups` are the
/// groups the unit belongs to.
/// A declaration without groups puts the unit into the implicit default
/// group, which runs as long as no group is enabled explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDeclaration {
    key: Cow<'static, str>,
    groups: BTreeSet<Cow<'static, str>>,
}

impl Default for GroupDeclaration {
    fn default() -> Self {
        Self {
            key: Cow::Borrowed(DEFAULT_KEY),
            groups: BTreeSet::new(),
        }
    }
}

impl GroupDeclaration {
    /// Declare membership in `groups` under the [`DEFAULT_KEY`].
    pub fn new<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Cow<'static, str>>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_key(self, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            ..self
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.as_ref())
    }

    /// The declared groups as owned names, as the resolver expects them.
    pub fn declared(&self) -> BTreeSet<String> {
        self.groups().map(String::from).collect()
    }

    pub fn is_default_group(&self) -> bool {
        self.groups.is_empty()
    }
}

impl std::fmt::Display for GroupDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[{}]", self.key, join(self.groups()))
    }
}

/// A named suite of tests sharing one group declaration.
///
/// Units may extend a base unit.
/// A unit without an own declaration takes the closest declaration found along
/// its base chain, then the declaration of its own module.
#[derive(Debug, Clone, Default)]
pub struct TestUnit {
    pub name: Cow<'static, str>,
    pub module: Cow<'static, str>,
    pub declaration: Option<GroupDeclaration>,
    pub base: Option<Arc<TestUnit>>,
}

impl TestUnit {
    pub fn new(name: impl Into<Cow<'static, str>>, module: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            ..Self::default()
        }
    }

    pub fn with_declaration(self, declaration: GroupDeclaration) -> Self {
        Self {
            declaration: Some(declaration),
            ..self
        }
    }

    pub fn extending(self, base: Arc<TestUnit>) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    /// Iterate over this unit followed by its base units, closest first.
    pub fn lineage(&self) -> impl Iterator<Item = &TestUnit> {
        std::iter::successors(Some(self), |unit| unit.base.as_deref())
    }

    /// The declaration of this unit or of the closest base unit that has one.
    pub fn inherited_declaration(&self) -> Option<&GroupDeclaration> {
        self.lineage().find_map(|unit| unit.declaration.as_ref())
    }

    /// Find the effective declaration for this unit.
    ///
    /// Lookup order is the unit and its base chain, then the declaration
    /// registered for exactly [`module`](Self::module).
    /// Parent modules are never consulted.
    pub fn resolve<'a>(&'a self, modules: &'a ModuleGroups) -> Option<&'a GroupDeclaration> {
        self.inherited_declaration()
            .or_else(|| modules.get(&self.module))
    }
}

/// Access to the [`TestUnit`] a test belongs to.
///
/// Implemented for the types typically stored in
/// [`TestMeta::extra`](crate::test::TestMeta::extra).
pub trait AsTestUnit {
    fn test_unit(&self) -> Option<&TestUnit>;
}

impl AsTestUnit for TestUnit {
    fn test_unit(&self) -> Option<&TestUnit> {
        Some(self)
    }
}

impl AsTestUnit for Arc<TestUnit> {
    fn test_unit(&self) -> Option<&TestUnit> {
        Some(self)
    }
}

impl AsTestUnit for &'static TestUnit {
    fn test_unit(&self) -> Option<&TestUnit> {
        Some(self)
    }
}

impl<U: AsTestUnit> AsTestUnit for Option<U> {
    fn test_unit(&self) -> Option<&TestUnit> {
        self.as_ref().and_then(AsTestUnit::test_unit)
    }
}

impl AsTestUnit for () {
    fn test_unit(&self) -> Option<&TestUnit> {
        None
    }
}

/// Module level group declarations, keyed by module path.
///
/// A declaration registered for `a::b` applies to units in `a::b` only,
/// units in `a::b::c` are unaffected.
#[derive(Debug, Clone, Default)]
pub struct ModuleGroups(HashMap<Cow<'static, str>, GroupDeclaration>);

impl ModuleGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, module: impl Into<Cow<'static, str>>, declaration: GroupDeclaration) -> Self {
        self.declare(module, declaration);
        self
    }

    /// Register `declaration` for `module`, replacing a previous one.
    pub fn declare(
        &mut self,
        module: impl Into<Cow<'static, str>>,
        declaration: GroupDeclaration,
    ) -> Option<GroupDeclaration> {
        self.0.insert(module.into(), declaration)
    }

    pub fn get(&self, module: &str) -> Option<&GroupDeclaration> {
        self.0.get(module)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
