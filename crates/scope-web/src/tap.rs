use anyhow::anyhow;
use web_sys as web;

/// Pull-based tap on a live media element's output.
///
/// The element is routed through an analyser configured for raw time-domain
/// reads: the fft size is the window size and smoothing is zero, so every
/// read reflects the current window only. One buffer is reused across reads;
/// past windows are never kept.
pub struct AudioTap {
    analyser: web::AnalyserNode,
    window: Vec<f32>,
}

impl AudioTap {
    pub fn attach(
        audio_ctx: &web::AudioContext,
        media: &web::HtmlMediaElement,
        window_size: u32,
    ) -> anyhow::Result<Self> {
        let source = audio_ctx
            .create_media_element_source(media)
            .map_err(|e| anyhow!("MediaElementAudioSourceNode error: {:?}", e))?;
        let analyser = web::AnalyserNode::new(audio_ctx)
            .map_err(|e| anyhow!("AnalyserNode error: {:?}", e))?;
        analyser.set_fft_size(window_size);
        analyser.set_smoothing_time_constant(0.0);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow!("connect error: {:?}", e))?;
        // keep the element audible through the tap
        analyser
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow!("connect error: {:?}", e))?;
        Ok(Self {
            analyser,
            window: vec![0.0; window_size as usize],
        })
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Overwrite the buffer with the most recent time-domain samples.
    pub fn read_window(&mut self) -> &[f32] {
        self.analyser.get_float_time_domain_data(&mut self.window);
        &self.window
    }
}
