use anshar_engine::core::{App, AppControl, FrameCtx};
use anshar_engine::render::RenderCtx;

use crate::scene::{Scene, CLEAR_COLOR};

/// The sample application: one scene, rebuilt never, rendered every frame.
///
/// The scene is created lazily on the first frame because resource creation
/// needs the live device; any initialization failure logs the full context
/// chain and shuts the app down.
#[derive(Default)]
pub struct CubeApp {
    scene: Option<Scene>,
}

impl App for CubeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        {
            let rctx = RenderCtx::new(
                ctx.gpu.device(),
                ctx.gpu.queue(),
                ctx.gpu.surface_format(),
                ctx.gpu.size(),
            );

            if self.scene.is_none() {
                match Scene::new(&rctx, ctx.gpu.is_software_adapter()) {
                    Ok(scene) => {
                        log::info!("scene initialized");
                        self.scene = Some(scene);
                    }
                    Err(e) => {
                        log::error!("scene: initialization failed: {e:#}");
                        return AppControl::Exit;
                    }
                }
            }

            let Some(scene) = self.scene.as_mut() else {
                return AppControl::Exit;
            };
            scene.ensure_depth(&rctx);
            scene.update(&rctx, ctx.time);
        }

        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_COLOR, Some(scene.depth_view()), |rctx, target| {
            scene.render(rctx, target);
        })
    }
}
