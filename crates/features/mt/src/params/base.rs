use parley_kernel::params::{Params, ParamsError};

/// Shared word-piece vocabulary size of the WMT'14 models.
pub(crate) const VOCAB_SIZE: i64 = 32_000;

#[derive(Clone, Copy)]
pub(crate) struct TransformerShape {
    pub(crate) model_dim: i64,
    pub(crate) hidden_dim: i64,
    pub(crate) num_heads: i64,
    pub(crate) num_layers: i64,
    pub(crate) dropout: f64,
}

pub(crate) const BASE: TransformerShape =
    TransformerShape { model_dim: 512, hidden_dim: 2048, num_heads: 8, num_layers: 6, dropout: 0.1 };

pub(crate) const BIG: TransformerShape =
    TransformerShape { model_dim: 1024, hidden_dim: 8192, num_heads: 16, num_layers: 6, dropout: 0.1 };

fn transformer_stack(shape: TransformerShape) -> Result<Params, ParamsError> {
    Params::new()
        .with("model_dim", shape.model_dim, "Width of every residual block.")?
        .with("num_layers", shape.num_layers, "Stacked transformer layers.")?
        .with("num_heads", shape.num_heads, "Attention heads per layer.")?
        .with("hidden_dim", shape.hidden_dim, "Feed-forward inner width.")?
        .with("residual_dropout_prob", shape.dropout, "Dropout before residual adds.")?
        .with("atten_dropout_prob", 0.0, "Dropout on attention weights.")?
        .with("vocab_size", VOCAB_SIZE, "Shared source/target vocabulary.")?
        .with("packed_input", true, "Inputs pack several sentences per row.")
}

pub(crate) fn transformer(
    name: &str,
    shape: TransformerShape,
    learning_rate: f64,
) -> Result<Params, ParamsError> {
    let mut decoder = transformer_stack(shape)?;
    decoder
        .define("label_smoothing_uncertainty", 0.1, "Uniform label smoothing mass.")?
        .define("beam_size", 4, "Beam width at decode time.")?
        .define("length_normalization", 0.6, "GNMT length penalty alpha.")?;

    let train = learner(learning_rate, "transformer", shape.model_dim, 300_000)?;

    Params::new()
        .with("name", name, "Model name used in checkpoints and summaries.")?
        .with("encoder", transformer_stack(shape)?, "Source encoder.")?
        .with("decoder", decoder, "Target decoder.")?
        .with("train", train, "Training schedule.")
}

pub(crate) fn rnmt(name: &str) -> Result<Params, ParamsError> {
    let encoder = Params::new()
        .with("num_lstm_layers", 6, "Bidirectional LSTM layers.")?
        .with("cell_dim", 1024, "LSTM cells per direction.")?
        .with("emb_dim", 1024, "Source embedding width.")?
        .with("dropout_prob", 0.2, "Dropout between layers.")?
        .with("vocab_size", VOCAB_SIZE, "Source vocabulary.")?;

    let decoder = Params::new()
        .with("num_lstm_layers", 8, "Unidirectional LSTM layers.")?
        .with("cell_dim", 1024, "LSTM cells.")?
        .with("emb_dim", 1024, "Target embedding width.")?
        .with("num_attention_heads", 4, "Multi-head additive attention.")?
        .with("dropout_prob", 0.2, "Dropout between layers.")?
        .with("vocab_size", VOCAB_SIZE, "Target vocabulary.")?
        .with("label_smoothing_uncertainty", 0.1, "Uniform label smoothing mass.")?
        .with("beam_size", 4, "Beam width at decode time.")?;

    Params::new()
        .with("name", name, "Model name used in checkpoints and summaries.")?
        .with("encoder", encoder, "Source encoder.")?
        .with("decoder", decoder, "Target decoder.")?
        .with("train", learner(1e-4, "linear_rampup_exponential_decay", 1024, 500_000)?, "Training schedule.")
}

fn learner(
    learning_rate: f64,
    schedule: &str,
    model_dim: i64,
    max_steps: i64,
) -> Result<Params, ParamsError> {
    Params::new()
        .with("optimizer", "adam", "Optimizer name.")?
        .with("adam_beta2", 0.98, "Second-moment decay.")?
        .with("learning_rate", learning_rate, "Peak learning rate.")?
        .with("lr_schedule", schedule, "Schedule applied to the peak rate.")?
        .with("warmup_steps", 4000, "Linear warmup length.")?
        .with("schedule_model_dim", model_dim, "Model width feeding the schedule.")?
        .with("clip_gradient_norm_to", 0.0, "Global norm clipping, 0 disables.")?
        .with("max_steps", max_steps, "Training steps.")
}

/// Input pipeline of one split.
pub(crate) struct Split<'a> {
    pub(crate) file_pattern: &'a str,
    pub(crate) vocab: &'a str,
    pub(crate) num_samples: i64,
    pub(crate) tokens_per_batch: i64,
    pub(crate) shuffle: bool,
}

pub(crate) fn input(split: &Split<'_>) -> Result<Params, ParamsError> {
    Params::new()
        .with("file_pattern", split.file_pattern, "Glob of input shards.")?
        .with("vocab_filepath", split.vocab, "Word-piece vocabulary.")?
        .with("num_samples", split.num_samples, "Sentence pairs in the split.")?
        .with("source_max_length", 256, "Longest source sentence in tokens.")?
        .with("target_max_length", 256, "Longest target sentence in tokens.")?
        .with("tokens_per_batch", split.tokens_per_batch, "Packed tokens per batch.")?
        .with("shuffle", split.shuffle, "Shuffle and repeat the split.")
}
