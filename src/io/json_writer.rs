use crate::{
    aba::{Argument, Attack, PipelineResult, Stage, StageResult},
    utils::LabelType,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, io::Write};

#[derive(Serialize)]
struct ArgumentOutput {
    id: String,
    claim: String,
    support: Vec<String>,
    derivation: Vec<String>,
}

impl<T> From<&Argument<T>> for ArgumentOutput
where
    T: LabelType,
{
    fn from(argument: &Argument<T>) -> Self {
        ArgumentOutput {
            id: argument.label(),
            claim: argument.claim().to_string(),
            support: argument.support().iter().map(T::to_string).collect(),
            derivation: argument.derivation().iter().cloned().collect(),
        }
    }
}

#[derive(Serialize)]
struct AttackOutput {
    attacker: String,
    attacked: String,
    kind: String,
}

impl From<&Attack> for AttackOutput {
    fn from(attack: &Attack) -> Self {
        AttackOutput {
            attacker: attack.attacker_label(),
            attacked: attack.attacked_label(),
            kind: attack.kind().to_string(),
        }
    }
}

#[derive(Serialize)]
struct StageOutput {
    language: Vec<String>,
    assumptions: Vec<String>,
    contraries: BTreeMap<String, String>,
    rules: BTreeMap<String, (String, Vec<String>)>,
    preferences: Vec<(String, String)>,
    arguments: Vec<ArgumentOutput>,
    attacks: Vec<AttackOutput>,
}

impl<T> From<&StageResult<T>> for StageOutput
where
    T: LabelType,
{
    fn from(stage: &StageResult<T>) -> Self {
        let framework = stage.framework();
        StageOutput {
            language: framework.language().iter().map(T::to_string).collect(),
            assumptions: framework.assumptions().iter().map(T::to_string).collect(),
            contraries: framework
                .contraries()
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect(),
            rules: framework
                .iter_rules()
                .map(|(id, r)| {
                    (
                        id.to_string(),
                        (
                            r.head().to_string(),
                            r.body().iter().map(T::to_string).collect(),
                        ),
                    )
                })
                .collect(),
            preferences: framework
                .preferences()
                .iter()
                .map(|(h, l)| (h.to_string(), l.to_string()))
                .collect(),
            arguments: stage.arguments().iter().map(ArgumentOutput::from).collect(),
            attacks: stage.attacks().iter().map(AttackOutput::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct PipelineOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    original: Option<StageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    non_circular: Option<StageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    atomic: Option<StageOutput>,
}

impl<T> From<&PipelineResult<T>> for PipelineOutput
where
    T: LabelType,
{
    fn from(result: &PipelineResult<T>) -> Self {
        let stage_output = |stage| result.get(stage).map(StageOutput::from);
        PipelineOutput {
            original: stage_output(Stage::Original),
            non_circular: stage_output(Stage::NonCircular),
            atomic: stage_output(Stage::Atomic),
        }
    }
}

/// A structure used to write the results of a pipeline as a JSON object.
///
/// The object has a key for each stage that was run (`original`, `non_circular`, `atomic`).
/// The value associated with a stage gives its framework (`language`, `assumptions`, `contraries`, `rules`, `preferences`),
/// its `arguments` and its `attacks`.
#[derive(Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Builds a writer producing indented JSON if `pretty` is `true`, compact JSON otherwise.
    pub fn new(pretty: bool) -> Self {
        JsonWriter { pretty }
    }

    /// Writes the results of a pipeline, followed by a new line.
    ///
    /// # Example
    ///
    /// ```
    /// # use abaplus::aba::PipelineOptions;
    /// # use abaplus::io::{JsonWriter, process_str};
    /// let result = process_str("L: [a]\nA: [a]", PipelineOptions::default()).unwrap();
    /// let mut out = Vec::new();
    /// JsonWriter::default().write(&mut out, &result).unwrap();
    /// assert!(String::from_utf8(out).unwrap().starts_with(r#"{"original":{"language":["a"]"#));
    /// ```
    pub fn write<T>(&self, writer: &mut dyn Write, result: &PipelineResult<T>) -> Result<()>
    where
        T: LabelType,
    {
        let context = "while writing the results";
        let output = PipelineOutput::from(result);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output).context(context)?;
        } else {
            serde_json::to_writer(&mut *writer, &output).context(context)?;
        }
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }
}
