//! Schema-driven record generator.

use crate::chance::ChanceProvider;
use crate::provider::RandomProvider;
use datagen_core::{
    FieldOptions, FieldTuple, GeneratedValue, NodeKind, SchemaFields, SchemaNode, Seed, ValueMap,
};
use tracing::{debug, trace};

/// Per-call expansion state, passed by value down the recursion.
///
/// `current_depth` is the number of recursion levels already consumed, or
/// `None` inside literal arrays where recursion is disabled. `name` is the
/// field being expanded and `enclosing` the options of the object declaring
/// it; together they decide whether an empty array is a recursion point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context<'a> {
    pub current_depth: Option<u32>,
    pub name: Option<&'a str>,
    pub enclosing: Option<&'a FieldOptions>,
}

impl<'a> Context<'a> {
    /// Context for a record started at `depth`.
    pub fn at_depth(depth: u32) -> Self {
        Self {
            current_depth: Some(depth),
            name: None,
            enclosing: None,
        }
    }

    /// Context for field `name` of an object declared with `enclosing`.
    pub fn field(self, name: &'a str, enclosing: &'a FieldOptions) -> Self {
        Self {
            current_depth: self.current_depth,
            name: Some(name),
            enclosing: Some(enclosing),
        }
    }

    /// Context for literal array elements: no depth, so nothing below recurses.
    pub fn detached(enclosing: &'a FieldOptions) -> Self {
        Self {
            current_depth: None,
            name: None,
            enclosing: Some(enclosing),
        }
    }
}

/// Generates records from a root field tuple.
///
/// One generator is built per run. The provider's state advances with every
/// value drawn, so the same seed, schema and call sequence always produce
/// the same records.
#[derive(Debug, Clone)]
pub struct SchemaGenerator<P = ChanceProvider> {
    /// Root schema and root options
    root: FieldTuple,
    /// Randomness provider shared by every record of this generator
    provider: P,
}

impl SchemaGenerator<ChanceProvider> {
    /// Create a generator backed by [`ChanceProvider`]; `None` seeds from OS
    /// entropy.
    pub fn new(root: FieldTuple, seed: Option<&Seed>) -> Self {
        Self::with_provider(root, ChanceProvider::new(seed))
    }
}

impl<P: RandomProvider> SchemaGenerator<P> {
    /// Create a generator around any provider.
    pub fn with_provider(root: FieldTuple, provider: P) -> Self {
        Self { root, provider }
    }

    /// Get a reference to the root field tuple.
    pub fn root(&self) -> &FieldTuple {
        &self.root
    }

    /// Get a reference to the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate `count` records starting at recursion depth `start_depth`.
    ///
    /// A `count` of zero or less yields no records.
    pub fn generate(&mut self, count: i64, start_depth: u32) -> Vec<GeneratedValue> {
        debug!(count, start_depth, "generating records");
        self.records(count, start_depth).collect()
    }

    /// Lazily generate records; equivalent to [`SchemaGenerator::generate`].
    pub fn records(&mut self, count: i64, start_depth: u32) -> Records<'_, P> {
        Records {
            generator: self,
            remaining: u64::try_from(count).unwrap_or(0),
            start_depth,
        }
    }

    /// Expand a single node.
    pub fn expand(
        &mut self,
        node: &SchemaNode,
        options: &FieldOptions,
        context: Context<'_>,
    ) -> GeneratedValue {
        self.expansion().expand(node, options, context)
    }

    fn next_record(&mut self, start_depth: u32) -> GeneratedValue {
        let mut expansion = self.expansion();
        let root = expansion.root;
        expansion.expand(&root.node, &root.options, Context::at_depth(start_depth))
    }

    fn expansion(&mut self) -> Expansion<'_, P> {
        Expansion {
            root: &self.root,
            provider: &mut self.provider,
        }
    }
}

/// Iterator that lazily generates records.
pub struct Records<'a, P> {
    generator: &'a mut SchemaGenerator<P>,
    remaining: u64,
    start_depth: u32,
}

impl<P: RandomProvider> Iterator for Records<'_, P> {
    type Item = GeneratedValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(self.start_depth))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<P: RandomProvider> ExactSizeIterator for Records<'_, P> {}

/// Borrow split of a generator: the root schema stays readable while the
/// provider is mutated by nested expansions.
struct Expansion<'r, P> {
    root: &'r FieldTuple,
    provider: &'r mut P,
}

impl<P: RandomProvider> Expansion<'_, P> {
    fn generate(&mut self, count: u32, depth: u32) -> Vec<GeneratedValue> {
        let root = self.root;
        (0..count)
            .map(|_| self.expand(&root.node, &root.options, Context::at_depth(depth)))
            .collect()
    }

    fn expand(
        &mut self,
        node: &SchemaNode,
        options: &FieldOptions,
        context: Context<'_>,
    ) -> GeneratedValue {
        let params = &options.params;
        match node.kind() {
            NodeKind::Boolean => self.provider.boolean(params),
            NodeKind::Falsy => self.provider.falsy(params),
            NodeKind::Integer => self.provider.integer(params),
            NodeKind::Natural => self.provider.natural(params),
            NodeKind::Text => self.provider.string(params),
            NodeKind::Named(name) => match self.provider.lookup(name) {
                Some(generator) => generator(&mut *self.provider, params),
                None => {
                    trace!(name, "unknown generator, falling back to string");
                    self.provider.string(params)
                }
            },
            NodeKind::Date => self.provider.date(params),
            NodeKind::Array(items) => match self.recursion_limit(node, context) {
                Some((depth, limit)) => {
                    let branches = self.provider.branch_count(limit);
                    debug!(
                        field = context.name,
                        depth, limit, branches, "expanding recursion point"
                    );
                    GeneratedValue::Array(self.generate(branches, depth + 1))
                }
                None => {
                    let element_options = FieldOptions::default();
                    let items = items
                        .iter()
                        .map(|item| self.expand(item, &element_options, Context::detached(options)))
                        .collect();
                    GeneratedValue::Array(items)
                }
            },
            NodeKind::Object(fields) => self.expand_object(fields, options, context),
        }
    }

    /// `(current depth, max depth)` when `node` is an active recursion point.
    ///
    /// The enclosing object must name this field in `recurse`, a depth must
    /// be tracked and still below the limit. The limit is the enclosing
    /// `depth`, falling back to the root's.
    fn recursion_limit(&self, node: &SchemaNode, context: Context<'_>) -> Option<(u32, u32)> {
        if !node.is_empty_array() {
            return None;
        }
        let enclosing = context.enclosing?;
        let target = enclosing.recurse.as_deref()?;
        if context.name != Some(target) {
            return None;
        }
        let depth = context.current_depth?;
        let limit = enclosing.depth.or(self.root.options.depth)?;
        (depth < limit).then_some((depth, limit))
    }

    fn expand_object(
        &mut self,
        fields: &SchemaFields,
        options: &FieldOptions,
        context: Context<'_>,
    ) -> GeneratedValue {
        let mut record = ValueMap::with_capacity(fields.len());
        for (name, tuple) in fields {
            if !can_generate(&record, tuple.options.dependency.as_deref()) {
                trace!(field = %name, "dependency not met, omitting field");
                continue;
            }
            let value = self.expand(&tuple.node, &tuple.options, context.field(name, options));
            record.insert(name.clone(), value);
        }
        GeneratedValue::Object(record)
    }
}

/// A field is generated when it has no dependency or the named sibling was
/// already generated with a truthy value.
fn can_generate(record: &ValueMap, dependency: Option<&str>) -> bool {
    match dependency {
        None | Some("") => true,
        Some(sibling) => record.get(sibling).is_some_and(GeneratedValue::is_truthy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::NamedGenerator;
    use datagen_core::GeneratorOptions;

    fn seed() -> Seed {
        Seed::Number(42)
    }

    fn generate(root: FieldTuple, count: i64) -> Vec<GeneratedValue> {
        SchemaGenerator::new(root, Some(&seed())).generate(count, 0)
    }

    fn tree_schema(depth: u32) -> FieldTuple {
        FieldTuple::with_options(
            SchemaNode::object([
                ("str", FieldTuple::new("")),
                ("bool", FieldTuple::new(true)),
                ("children", FieldTuple::new(SchemaNode::recursion_point())),
            ]),
            FieldOptions::new().recurse("children", depth),
        )
    }

    fn nesting(record: &GeneratedValue) -> u32 {
        match record.get("children").and_then(GeneratedValue::as_array) {
            Some(children) => children.iter().map(|c| 1 + nesting(c)).max().unwrap_or(0),
            None => 0,
        }
    }

    #[test]
    fn test_non_positive_count_is_empty() {
        for count in [0, -1, -100] {
            assert!(generate(FieldTuple::new(""), count).is_empty());
        }
    }

    #[test]
    fn test_count_is_exact() {
        assert_eq!(generate(FieldTuple::new("name"), 37).len(), 37);
    }

    #[test]
    fn test_primitive_markers() {
        for value in generate(FieldTuple::new(false), 50) {
            assert!(matches!(value, GeneratedValue::Bool(_)));
        }
        for value in generate(FieldTuple::new(f64::NAN), 50) {
            assert!(value.is_falsy());
        }
        for value in generate(FieldTuple::new(-30), 50) {
            assert!(matches!(value, GeneratedValue::Int(_)));
        }
        for value in generate(FieldTuple::new(30), 50) {
            assert!(value.as_i64().unwrap() >= 0);
        }
        for value in generate(FieldTuple::new(""), 50) {
            assert!(matches!(value, GeneratedValue::String(_)));
        }
        for value in generate(FieldTuple::new(SchemaNode::Null), 50) {
            assert!(value.is_falsy());
        }
        for value in generate(FieldTuple::default(), 50) {
            assert!(value.is_falsy());
        }
        for value in generate(FieldTuple::new(SchemaNode::Date), 10) {
            assert!(value.as_datetime().is_some());
        }
    }

    #[test]
    fn test_options_forwarded_to_provider() {
        let root = FieldTuple::with_options(
            -1,
            FieldOptions::new().param("min", -3).param("max", -1),
        );
        for value in generate(root, 50) {
            assert!((-3..=-1).contains(&value.as_i64().unwrap()));
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_string() {
        let root = FieldTuple::with_options("notAGenerator", FieldOptions::new().param("length", 6));
        for value in generate(root, 10) {
            assert_eq!(value.as_str().unwrap().chars().count(), 6);
        }
    }

    #[test]
    fn test_literal_array() {
        for value in generate(FieldTuple::new(SchemaNode::array(vec![SchemaNode::from(1)])), 20) {
            let items = value.as_array().unwrap();
            assert_eq!(items.len(), 1);
            assert!(items[0].as_i64().unwrap() >= 0);
        }
    }

    #[test]
    fn test_dependency_controls_presence() {
        let root = FieldTuple::new(SchemaNode::object([
            ("str", FieldTuple::new("")),
            ("bool", FieldTuple::new(true)),
            (
                "maybe",
                FieldTuple::with_options("", FieldOptions::new().dependency("bool")),
            ),
        ]));
        let records = generate(root, 200);
        let mut seen = (false, false);
        for record in &records {
            let truthy = record.get("bool").unwrap().is_truthy();
            match record.get("maybe") {
                Some(GeneratedValue::String(_)) => {
                    assert!(truthy);
                    seen.0 = true;
                }
                Some(other) => panic!("unexpected maybe value {other:?}"),
                None => {
                    assert!(!truthy);
                    seen.1 = true;
                }
            }
        }
        assert_eq!(seen, (true, true));
    }

    #[test]
    fn test_dangling_dependency_omits_field() {
        let root = FieldTuple::new(SchemaNode::object([(
            "orphan",
            FieldTuple::with_options("", FieldOptions::new().dependency("missing")),
        )]));
        for record in generate(root, 10) {
            assert!(record.as_object().unwrap().is_empty());
        }
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let root = FieldTuple::new(SchemaNode::object([
            ("zeta", FieldTuple::new(1)),
            ("alpha", FieldTuple::new(true)),
            ("mid", FieldTuple::new("")),
        ]));
        let record = &generate(root, 1)[0];
        let keys: Vec<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_recursion_respects_depth() {
        for depth in 0..4 {
            for trial in 0..50u64 {
                let mut generator =
                    SchemaGenerator::new(tree_schema(depth), Some(&Seed::Number(trial)));
                for record in generator.generate(3, 0) {
                    assert!(nesting(&record) <= depth);
                    let children = record.get("children").unwrap().as_array().unwrap();
                    assert!(children.len() as u32 <= depth);
                    for child in children {
                        assert!(child.get("str").is_some());
                        assert!(child.get("bool").is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn test_recursion_reaches_beyond_first_level() {
        let mut deepest = 0;
        for trial in 0..100u64 {
            let mut generator = SchemaGenerator::new(tree_schema(3), Some(&Seed::Number(trial)));
            deepest = deepest.max(nesting(&generator.generate(1, 0)[0]));
        }
        assert!(deepest >= 2, "deepest nesting was {deepest}");
    }

    #[test]
    fn test_recursion_cutoff_yields_literal_empty_array() {
        let mut generator = SchemaGenerator::new(tree_schema(2), Some(&seed()));
        for record in generator.generate(5, 2) {
            assert_eq!(record.get("children"), Some(&GeneratedValue::Array(vec![])));
        }
    }

    #[test]
    fn test_recursion_without_depth_is_inert() {
        let root = FieldTuple::with_options(
            SchemaNode::object([("children", FieldTuple::new(SchemaNode::recursion_point()))]),
            FieldOptions {
                recurse: Some("children".to_string()),
                ..FieldOptions::default()
            },
        );
        for record in generate(root, 20) {
            assert_eq!(record.get("children"), Some(&GeneratedValue::Array(vec![])));
        }
    }

    #[test]
    fn test_recursion_inside_literal_array_is_inert() {
        let inner = SchemaNode::object([("children", FieldTuple::new(SchemaNode::recursion_point()))]);
        let root = FieldTuple::with_options(
            SchemaNode::object([(
                "children",
                FieldTuple::with_options(
                    SchemaNode::array(vec![inner]),
                    FieldOptions::new().recurse("children", 3),
                ),
            )]),
            FieldOptions::new().recurse("children", 3),
        );
        for record in generate(root, 20) {
            let items = record.get("children").unwrap().as_array().unwrap();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].get("children"), Some(&GeneratedValue::Array(vec![])));
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let schema = tree_schema(3);
        let a = SchemaGenerator::new(schema.clone(), Some(&Seed::from("repeat"))).generate(20, 0);
        let b = SchemaGenerator::new(schema, Some(&Seed::from("repeat"))).generate(20, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_matches_generate() {
        let schema = tree_schema(2);
        let eager = SchemaGenerator::new(schema.clone(), Some(&seed())).generate(10, 0);
        let mut generator = SchemaGenerator::new(schema, Some(&seed()));
        let records = generator.records(10, 0);
        assert_eq!(records.len(), 10);
        assert_eq!(records.collect::<Vec<_>>(), eager);
    }

    #[test]
    fn test_records_size_hint_tracks_remaining() {
        let mut generator = SchemaGenerator::new(FieldTuple::new(""), Some(&seed()));
        let mut records = generator.records(3, 0);
        assert_eq!(records.size_hint(), (3, Some(3)));
        records.next();
        assert_eq!(records.size_hint(), (2, Some(2)));
        assert_eq!(generator.records(-4, 0).size_hint(), (0, Some(0)));

        let huge = generator.records(i64::MAX, 0);
        match usize::try_from(i64::MAX) {
            Ok(len) => assert_eq!(huge.size_hint(), (len, Some(len))),
            Err(_) => assert_eq!(huge.size_hint(), (usize::MAX, None)),
        }
    }

    #[test]
    fn test_nested_recurse_uses_its_own_depth() {
        // The root declares no depth; the nested object's own `depth`
        // bounds recursion at its `recurse` field.
        let nested = FieldTuple::with_options(
            SchemaNode::object([
                ("label", FieldTuple::new("")),
                ("items", FieldTuple::new(SchemaNode::recursion_point())),
            ]),
            FieldOptions::new().recurse("items", 2),
        );
        let root = FieldTuple::new(SchemaNode::object([("group", nested)]));

        let mut recursed = false;
        for trial in 0..50u64 {
            let mut generator = SchemaGenerator::new(root.clone(), Some(&Seed::Number(trial)));
            for record in generator.generate(5, 0) {
                let group = record.get("group").unwrap();
                let items = group.get("items").unwrap().as_array().unwrap();
                assert!(items.len() <= 2);
                for item in items {
                    // Branches restart from the root, whose `group` is at depth 1.
                    let inner = item.get("group").unwrap().get("items").unwrap();
                    assert!(inner.as_array().unwrap().len() <= 2);
                    recursed = true;
                }
            }
        }
        assert!(recursed);
    }

    #[test]
    fn test_generators_are_independent_across_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<SchemaGenerator>();

        let expected = generate(tree_schema(2), 10);
        let handles: Vec<_> = (0..2)
            .map(|_| std::thread::spawn(|| generate(tree_schema(2), 10)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    /// Counts how often the `name` generator is invoked.
    struct CountingProvider {
        inner: ChanceProvider,
        calls: usize,
    }

    impl RandomProvider for CountingProvider {
        fn boolean(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            self.inner.boolean(options)
        }

        fn falsy(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            RandomProvider::falsy(&mut self.inner, options)
        }

        fn integer(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            RandomProvider::integer(&mut self.inner, options)
        }

        fn natural(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            RandomProvider::natural(&mut self.inner, options)
        }

        fn string(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            RandomProvider::string(&mut self.inner, options)
        }

        fn date(&mut self, options: &GeneratorOptions) -> GeneratedValue {
            RandomProvider::date(&mut self.inner, options)
        }

        fn branch_count(&mut self, max: u32) -> u32 {
            self.inner.branch_count(max)
        }

        fn lookup(&self, name: &str) -> Option<NamedGenerator<Self>> {
            if name != "name" {
                return None;
            }
            let generator: NamedGenerator<Self> = |provider, options| {
                provider.calls += 1;
                provider.inner.name(options)
            };
            Some(generator)
        }
    }

    #[test]
    fn test_named_generator_invoked_once_per_record() {
        let provider = CountingProvider {
            inner: ChanceProvider::new(Some(&seed())),
            calls: 0,
        };
        let mut generator = SchemaGenerator::with_provider(FieldTuple::new("name"), provider);
        let records = generator.generate(25, 0);
        assert_eq!(records.len(), 25);
        assert_eq!(generator.provider().calls, 25);
        assert!(records.iter().all(|r| r.as_str().is_some()));
    }
}
