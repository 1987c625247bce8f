use std::collections::HashMap;

/// Static table mapping common resume-achievement verbs to a worked example
/// of a well-quantified rewrite. Used only to build advisory suggestions;
/// nothing from this table is ever written into the record.
pub struct VerbExamples {
    examples: HashMap<&'static str, &'static str>,
}

impl VerbExamples {
    pub fn new() -> Self {
        let mut taxonomy = Self {
            examples: HashMap::new(),
        };

        taxonomy.init_leadership();
        taxonomy.init_engineering();
        taxonomy.init_collaboration();

        taxonomy
    }

    fn init_leadership(&mut self) {
        let examples = [
            (
                "led",
                "Led a team of 8 engineers, cutting release cycle time by 25%",
            ),
            (
                "managed",
                "Managed a $250K project budget across 3 concurrent workstreams",
            ),
            (
                "mentored",
                "Mentored 5 junior developers, with 4 promoted within a year",
            ),
            (
                "conducted",
                "Conducted 20+ user interviews that shaped 3 major releases",
            ),
            (
                "coordinated",
                "Coordinated releases across 4 teams, reducing deployment conflicts by 60%",
            ),
            (
                "trained",
                "Trained 30 staff members on the new tooling in under 6 weeks",
            ),
        ];

        for (verb, example) in examples {
            self.examples.insert(verb, example);
        }
    }

    fn init_engineering(&mut self) {
        let examples = [
            (
                "implemented",
                "Implemented a caching layer that cut page load time by 40%",
            ),
            (
                "developed",
                "Developed 3 customer-facing features used by 10,000+ monthly users",
            ),
            (
                "designed",
                "Designed a schema migration that reduced query latency by 35%",
            ),
            (
                "debugged",
                "Debugged and resolved 50+ production issues with a 2-hour median turnaround",
            ),
            (
                "automated",
                "Automated the regression suite, saving 12 engineer-hours per week",
            ),
            (
                "optimized",
                "Optimized the ingest pipeline, doubling throughput on the same hardware",
            ),
        ];

        for (verb, example) in examples {
            self.examples.insert(verb, example);
        }
    }

    fn init_collaboration(&mut self) {
        let examples = [
            (
                "collaborated",
                "Collaborated with 3 cross-functional teams to ship 2 quarters ahead of plan",
            ),
            (
                "participated",
                "Participated in 100+ code reviews, halving post-merge defect rate",
            ),
            (
                "contributed",
                "Contributed 15 patches to upstream projects, 12 of them merged",
            ),
            (
                "presented",
                "Presented findings to audiences of 50+ at 3 internal conferences",
            ),
        ];

        for (verb, example) in examples {
            self.examples.insert(verb, example);
        }
    }

    pub fn lookup(&self, verb: &str) -> Option<&'static str> {
        self.examples.get(verb.to_lowercase().as_str()).copied()
    }
}

impl Default for VerbExamples {
    fn default() -> Self {
        Self::new()
    }
}
