//! Time-domain features of a raw vibration waveform.

/// RMS, kurtosis and crest factor of one waveform window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformFeatures {
    pub rms: f64,
    /// Pearson kurtosis (a Gaussian signal scores 3). Zero for a constant signal.
    pub kurtosis: f64,
    /// Peak absolute amplitude over RMS. Zero for an all-zero signal.
    pub crest_factor: f64,
    pub peak: f64,
}

impl WaveformFeatures {
    /// Extract features, or `None` for an empty window or one containing
    /// non-finite samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultfuse_experts::WaveformFeatures;
    ///
    /// let square = [1.0, -1.0, 1.0, -1.0];
    /// let f = WaveformFeatures::extract(&square).unwrap();
    /// assert!((f.rms - 1.0).abs() < 1e-12);
    /// assert!((f.crest_factor - 1.0).abs() < 1e-12);
    /// assert!((f.kurtosis - 1.0).abs() < 1e-12);
    /// ```
    pub fn extract(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() || samples.iter().any(|x| !x.is_finite()) {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let rms = (samples.iter().map(|x| x * x).sum::<f64>() / n).sqrt();
        let peak = samples.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));

        let kurtosis = if variance > 0.0 {
            let fourth = samples.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n;
            fourth / (variance * variance)
        } else {
            0.0
        };
        let crest_factor = if rms > 0.0 { peak / rms } else { 0.0 };

        Some(Self {
            rms,
            kurtosis,
            crest_factor,
            peak,
        })
    }
}
