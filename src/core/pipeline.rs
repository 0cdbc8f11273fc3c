use crate::{
    analysis::indices::{
        aggregate,
        IndexRecord,
    },
    core::models::EnrichedToken,
    dictionary::{
        enrich,
        AssociationTable,
        FrequencyTable,
    },
    segmentation::segment,
    tagging::{
        tag_document,
        AscTagger,
    },
};

/// Run segment -> tag -> enrich for one document, keeping the token-level
/// output. Sentence and token order follow the input text throughout.
pub fn extract_enriched_doc(
    text: &str,
    tagger: &dyn AscTagger,
    freq_table: &FrequencyTable,
    assoc_table: &AssociationTable,
) -> Vec<Vec<EnrichedToken>> {
    let sentences = segment(text);
    let tagged = tag_document(&sentences, tagger);
    enrich(tagged, freq_table, assoc_table)
}

/// Compute the index record for one document. Classifier failures degrade to
/// unlabeled sentences inside `tag_document`, so a document always produces
/// a record.
pub fn process_text(
    text: &str,
    tagger: &dyn AscTagger,
    freq_table: &FrequencyTable,
    assoc_table: &AssociationTable,
) -> IndexRecord {
    let enriched = extract_enriched_doc(text, tagger, freq_table, assoc_table);
    aggregate(&enriched)
}
