use crate::{
    Error,
    group::{
        AsTestUnit, ConfigProvider, Decision, EnabledGroups, EnvProvider, MissingDeclaration,
        ModuleGroups, TestUnit, decide,
    },
    ignore::{DefaultIgnore, IgnoreStatus, TestIgnore},
    test::TestMeta,
};

/// A [`TestIgnore`] implementation that skips tests whose test group is not
/// enabled.
///
/// The `Inner` strategy is asked first, by default the regular
/// [`DefaultIgnore`] handling.
/// Only tests it lets run are gated by their groups.
///
/// For every remaining test the gate
/// 1. resolves the group declaration of the test's [`TestUnit`]
///    (own, inherited, then module level),
/// 2. reads the enabled groups for the declaration's key from the `Provider`,
/// 3. runs the test or ignores it with a reason naming both group sets.
///
/// Tests without any declaration are handled according to the
/// [`MissingDeclaration`] policy.
#[derive(Debug, Clone)]
pub struct GroupIgnore<Provider = EnvProvider, Inner = DefaultIgnore> {
    provider: Provider,
    inner: Inner,
    modules: ModuleGroups,
    policy: MissingDeclaration,
}

impl Default for GroupIgnore {
    fn default() -> Self {
        Self {
            provider: EnvProvider,
            inner: DefaultIgnore::default(),
            modules: ModuleGroups::default(),
            policy: MissingDeclaration::default(),
        }
    }
}

impl GroupIgnore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Provider, Inner> GroupIgnore<Provider, Inner> {
    pub fn with_provider<WithProvider: ConfigProvider>(
        self,
        provider: WithProvider,
    ) -> GroupIgnore<WithProvider, Inner> {
        GroupIgnore {
            provider,
            inner: self.inner,
            modules: self.modules,
            policy: self.policy,
        }
    }

    pub fn with_inner<WithInner>(self, inner: WithInner) -> GroupIgnore<Provider, WithInner> {
        GroupIgnore {
            provider: self.provider,
            inner,
            modules: self.modules,
            policy: self.policy,
        }
    }

    pub fn with_modules(self, modules: ModuleGroups) -> Self {
        Self { modules, ..self }
    }

    pub fn with_policy(self, policy: MissingDeclaration) -> Self {
        Self { policy, ..self }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }
}

impl<Provider: ConfigProvider, Inner> GroupIgnore<Provider, Inner> {
    /// Decide on a single unit, without consulting the inner strategy.
    ///
    /// `None` means no declaration applies to the unit.
    pub fn decision(&self, unit: &TestUnit) -> Option<Decision> {
        let declaration = unit.resolve(&self.modules)?;
        let enabled = EnabledGroups::read(&self.provider, declaration.key());
        Some(decide(enabled, declaration.declared()))
    }
}

impl<Extra, Provider, Inner> TestIgnore<Extra> for GroupIgnore<Provider, Inner>
where
    Extra: AsTestUnit,
    Provider: ConfigProvider,
    Inner: TestIgnore<Extra>,
{
    fn ignore(&self, meta: &TestMeta<Extra>) -> Result<IgnoreStatus, Error> {
        let status = self.inner.ignore(meta)?;
        if !status.runs() {
            return Ok(status);
        }

        let decision = meta.extra.test_unit().and_then(|unit| self.decision(unit));
        match (decision, self.policy) {
            (Some(decision), _) => {
                tracing::debug!(test = %meta.name, ?decision, "group decision");
                Ok(decision.into())
            }
            (None, MissingDeclaration::Run) => {
                tracing::debug!(test = %meta.name, "no test group declared, running");
                Ok(IgnoreStatus::Run)
            }
            (None, MissingDeclaration::Fail) => {
                tracing::warn!(test = %meta.name, "no test group declared, rejecting");
                Err(Error::MissingDeclaration {
                    test: meta.name.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        group::{ALL_GROUPS, DEFAULT_KEY, GroupDeclaration, MapProvider},
        outcome::{TestFailure, TestStatus},
        test::Test,
        test_support::*,
    };

    fn unit(declaration: Option<GroupDeclaration>) -> Arc<TestUnit> {
        let unit = TestUnit::new("Unit", "testgroups::tests");
        Arc::new(match declaration {
            Some(declaration) => unit.with_declaration(declaration),
            None => unit,
        })
    }

    fn gate(provider: &MapProvider) -> GroupIgnore<MapProvider> {
        GroupIgnore::new().with_provider(provider.clone())
    }

    fn status(gate: &GroupIgnore<MapProvider>, unit: Arc<TestUnit>) -> IgnoreStatus {
        let test: Test<Arc<TestUnit>> = test! {name: "t", extra: unit};
        gate.ignore(&test.meta).unwrap()
    }

    #[test]
    fn declared_default_group() {
        let provider = MapProvider::new();
        let status = status(&gate(&provider), unit(Some(GroupDeclaration::default())));
        assert_eq!(status, IgnoreStatus::Run);
    }

    #[test]
    fn all_groups() {
        let provider = MapProvider::new().with(DEFAULT_KEY, ALL_GROUPS);
        let declaration = GroupDeclaration::new(["group1,group2"]);
        assert!(status(&gate(&provider), unit(Some(declaration))).runs());
    }

    #[test]
    fn no_declaration_runs() {
        let provider = MapProvider::new().with(DEFAULT_KEY, "customGroup");
        assert!(status(&gate(&provider), unit(None)).runs());
    }

    #[test]
    fn single_matching_group() {
        let provider = MapProvider::new().with(DEFAULT_KEY, "customGroup");
        let declaration = GroupDeclaration::new(["customGroup"]);
        assert!(status(&gate(&provider), unit(Some(declaration))).runs());
    }

    #[test]
    fn non_matching_group() {
        let provider = MapProvider::new().with(DEFAULT_KEY, "customGroup");
        let status = status(&gate(&provider), unit(Some(GroupDeclaration::default())));
        assert_eq!(
            status,
            IgnoreStatus::IgnoreWithReason(
                "None of the test groups [] are enabled. Enabled test groups: [customGroup]"
                    .into()
            )
        );
    }

    #[test]
    fn enabled_groups_are_read_for_every_decision() {
        let provider = MapProvider::new();
        let gate = gate(&provider);
        let unit = unit(Some(GroupDeclaration::new(["myGroup"])));

        assert!(!status(&gate, unit.clone()).runs());
        provider.set(DEFAULT_KEY, "myGroup");
        assert!(status(&gate, unit.clone()).runs());
        provider.clear(DEFAULT_KEY);
        assert!(!status(&gate, unit).runs());
    }

    #[test]
    fn keys_are_isolated() {
        let provider = MapProvider::new().with("myKey", "myGroup");
        let gate = gate(&provider);

        let own_key = GroupDeclaration::new(["myGroup"]).with_key("myKey");
        let default_key = GroupDeclaration::new(["myGroup"]);

        assert!(status(&gate, unit(Some(own_key))).runs());
        assert!(!status(&gate, unit(Some(default_key))).runs());
    }

    #[test]
    fn strict_policy_rejects_undeclared_tests() {
        let provider = MapProvider::new();
        let gate = gate(&provider).with_policy(MissingDeclaration::Fail);
        let test: Test<Arc<TestUnit>> = test! {name: "undeclared", extra: unit(None)};

        assert_eq!(
            gate.ignore(&test.meta),
            Err(Error::MissingDeclaration {
                test: String::from("undeclared")
            })
        );
    }

    #[test]
    fn strict_policy_fails_through_the_harness() {
        let provider = MapProvider::new();
        let tests: [Test<Option<Arc<TestUnit>>>; 2] = [
            test! {name: "undeclared", extra: None},
            test! {
                name: "declared",
                extra: Some(unit(Some(GroupDeclaration::default())))
            },
        ];

        let report = harness(&tests)
            .with_ignore(gate(&provider).with_policy(MissingDeclaration::Fail))
            .run();

        assert!(matches!(
            report.outcomes[0].1.status,
            TestStatus::Failed(TestFailure::Misconfigured(_))
        ));
        assert!(report.outcomes[1].1.passed());
        assert_eq!((report.run(), report.failed()), (1, 1));
    }

    #[test]
    fn inner_ignore_wins_over_groups() {
        let provider = MapProvider::new().with(DEFAULT_KEY, ALL_GROUPS);
        let tests: [Test<Arc<TestUnit>>; 1] = [test! {
            name: "ignored",
            ignore: "flaky",
            extra: unit(Some(GroupDeclaration::new(["slow"])))
        }];

        let report = harness(&tests).with_ignore(gate(&provider)).run();
        assert_eq!(report.outcomes[0].1.status.reason(), Some("flaky"));
    }

    #[test]
    fn module_declarations_are_consulted() {
        let provider = MapProvider::new();
        let gate = gate(&provider).with_modules(ModuleGroups::new().with(
            "testgroups::tests",
            GroupDeclaration::new(["package"]).with_key("packagetestgroup"),
        ));

        assert!(!status(&gate, unit(None)).runs());
        provider.set("packagetestgroup", "package");
        assert!(status(&gate, unit(None)).runs());
    }
}
