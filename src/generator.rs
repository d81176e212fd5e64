use rand::seq::SliceRandom;
use rand::Rng;

pub const ADJECTIVE_PROBABILITY: f64 = 0.5;
pub const CLAUSE_PROBABILITY: f64 = 0.4;

/// Word-class pools the sentence template draws from
#[derive(Debug, Clone, Copy)]
pub struct WordPools {
    pub subjects: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub objects: &'static [&'static str],
    pub adjectives: &'static [&'static str],
    pub connectors: &'static [&'static str],
    pub continuations: &'static [&'static str],
}

impl Default for WordPools {
    fn default() -> Self {
        Self {
            subjects: &[
                "The developer",
                "My friend",
                "A curious cat",
                "The pilot",
                "Our team",
                "The old robot",
                "Every student",
                "The compiler",
            ],
            verbs: &[
                "builds",
                "reads",
                "finds",
                "writes",
                "tests",
                "paints",
                "fixes",
                "watches",
            ],
            objects: &[
                "a program",
                "the report",
                "a garden",
                "the network",
                "a melody",
                "the database",
                "a puzzle",
                "the bridge",
            ],
            adjectives: &[
                "quiet",
                "bright",
                "strange",
                "modern",
                "careful",
                "tiny",
                "endless",
                "clever",
            ],
            connectors: &["because", "while", "although", "when", "after", "until"],
            continuations: &[
                "the sun goes down",
                "the coffee gets cold",
                "everyone else is asleep",
                "the music keeps playing",
                "the deadline comes closer",
                "the rain stops",
            ],
        }
    }
}

/// Builds practice sentences from a fixed probabilistic template:
/// `Subject Verb [Adjective] Object [Connector SecondPart].`
#[derive(Debug, Clone, Default)]
pub struct SentenceGenerator {
    pools: WordPools,
}

impl SentenceGenerator {
    pub fn new(pools: WordPools) -> Self {
        Self { pools }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let p = &self.pools;
        let mut sentence = String::new();

        sentence.push_str(draw(p.subjects, rng));
        sentence.push(' ');
        sentence.push_str(draw(p.verbs, rng));
        sentence.push(' ');

        if rng.gen_bool(ADJECTIVE_PROBABILITY) {
            sentence.push_str(draw(p.adjectives, rng));
            sentence.push(' ');
        }

        sentence.push_str(draw(p.objects, rng));

        if rng.gen_bool(CLAUSE_PROBABILITY) {
            sentence.push(' ');
            sentence.push_str(draw(p.connectors, rng));
            sentence.push(' ');
            sentence.push_str(draw(p.continuations, rng));
        }

        sentence.push('.');
        sentence
    }
}

fn draw<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
