//! Building blocks shared by the ASR experiments.
use parley_kernel::params::{Params, ParamsError};

/// Grapheme vocabulary: letters, digits, punctuation and control symbols.
pub(crate) const GRAPHEME_VOCAB_SIZE: i64 = 76;

pub(crate) struct EncoderShape {
    pub(crate) num_lstm_layers: i64,
    pub(crate) lstm_cell_size: i64,
}

pub(crate) fn encoder(shape: &EncoderShape) -> Result<Params, ParamsError> {
    Params::new()
        .with("input_shape", vec![0, 0, 80, 1], "Batch, frames, filterbank bins, channels.")?
        .with("num_cnn_layers", 2, "Strided conv layers before the LSTM stack.")?
        .with("conv_filter_shapes", vec![vec![3, 3, 1, 32], vec![3, 3, 32, 32]], "Per conv layer.")?
        .with("conv_filter_strides", vec![vec![2, 2], vec![2, 2]], "Time and frequency strides.")?
        .with("num_lstm_layers", shape.num_lstm_layers, "Bidirectional LSTM layers.")?
        .with("lstm_cell_size", shape.lstm_cell_size, "Cells per direction.")?
        .with("project_lstm_output", true, "Project between LSTM layers.")?
        .with("dropout_prob", 0.0, "Dropout on LSTM outputs.")
}

pub(crate) fn decoder(source_dim: i64, rnn_cell_dim: i64) -> Result<Params, ParamsError> {
    let beam_search = Params::new()
        .with("beam_size", 3.0, "Log-prob margin for pruning hypotheses.")?
        .with("num_hyps_per_beam", 8, "Hypotheses kept per utterance.")?
        .with("target_seq_len", 300, "Maximum decoded length.")?;

    Params::new()
        .with("source_dim", source_dim, "Width of the encoder output.")?
        .with("emb_dim", 96, "Target embedding width.")?
        .with("rnn_layers", 2, "Decoder LSTM layers.")?
        .with("rnn_cell_dim", rnn_cell_dim, "Decoder LSTM width.")?
        .with("attention_hidden_dim", 128, "Additive attention width.")?
        .with("target_vocab_size", GRAPHEME_VOCAB_SIZE, "Output vocabulary.")?
        .with("label_smoothing_uncertainty", 0.1, "Uniform label smoothing mass.")?
        .with("beam_search", beam_search, "Decoding settings.")
}

pub(crate) fn learner(learning_rate: f64, max_steps: i64) -> Result<Params, ParamsError> {
    Params::new()
        .with("optimizer", "adam", "Optimizer name.")?
        .with("learning_rate", learning_rate, "Peak learning rate.")?
        .with("lr_schedule", "piecewise", "Schedule applied to the peak rate.")?
        .with("clip_gradient_norm_to", 1.0, "Global norm clipping threshold.")?
        .with("l2_regularizer_weight", 1e-6, "Weight decay.")?
        .with("max_steps", max_steps, "Training steps.")
}

pub(crate) fn model(
    name: &str,
    encoder: Params,
    decoder: Params,
    train: Params,
) -> Result<Params, ParamsError> {
    Params::new()
        .with("name", name, "Model name used in checkpoints and summaries.")?
        .with("encoder", encoder, "Acoustic encoder.")?
        .with("decoder", decoder, "Attention decoder.")?
        .with("train", train, "Training schedule.")
}

/// Input pipeline of one split.
pub(crate) struct Split<'a> {
    pub(crate) file_pattern: &'a str,
    pub(crate) num_samples: i64,
    pub(crate) bucket_batch_limit: Vec<i64>,
    pub(crate) shuffle: bool,
}

pub(crate) fn input(split: Split<'_>) -> Result<Params, ParamsError> {
    let tokenizer = Params::new()
        .with("kind", "ascii", "Tokenizer family.")?
        .with("vocab_size", GRAPHEME_VOCAB_SIZE, "Tokenizer vocabulary.")?
        .with("vocab_filepath", None::<String>, "Vocabulary file, unused for ascii.")?;

    Params::new()
        .with("file_pattern", split.file_pattern, "Glob of input shards.")?
        .with("num_samples", split.num_samples, "Utterances in the split.")?
        .with("frame_size", 80, "Filterbank bins per frame.")?
        .with("append_eos_frame", true, "Append an end-of-sequence frame.")?
        .with("bucket_upper_bound", vec![639, 1062, 1275, 1377, 1449, 1506, 1563, 1710], "Frame buckets.")?
        .with("bucket_batch_limit", split.bucket_batch_limit, "Batch size per bucket.")?
        .with("target_max_length", 620, "Longest transcript in tokens.")?
        .with("shuffle", split.shuffle, "Shuffle and repeat the split.")?
        .with("tokenizer", tokenizer, "Transcript tokenization.")
}

/// Batch limits for training: smaller batches for longer buckets.
pub(crate) fn train_batches() -> Vec<i64> {
    vec![64, 48, 48, 48, 32, 32, 32, 24]
}

/// Evaluation batch limits.
pub(crate) fn eval_batches() -> Vec<i64> {
    vec![96, 96, 96, 96, 96, 96, 96, 48]
}
