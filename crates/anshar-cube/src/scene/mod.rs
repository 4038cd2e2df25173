//! The sample scene: a spinning textured cube above a textured ground plane,
//! plus the cube's planar-projected shadow.
//!
//! `Scene` owns every GPU handle and all scene data; it is built once after
//! the device comes up and passed by reference to the update/render routines.

mod clock;
mod geometry;
mod pipelines;
mod transforms;
mod uniforms;

use std::path::PathBuf;

use anyhow::{Context, Result};
use anshar_engine::render::{
    linear_sampler, DepthTarget, MeshBuffers, RenderCtx, RenderTarget, Texture2d, UniformBuffer,
};
use anshar_engine::time::FrameTime;

use clock::SceneClock;
use pipelines::ScenePipelines;
use uniforms::{ModelUniform, ProjectionUniform, ViewUniform};

/// Background clear color.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.125,
    b: 0.3,
    a: 1.0,
};

/// One step of the fixed per-frame draw sequence.
///
/// The order is load-bearing: the shadow draws after the opaque cube with
/// depth writes disabled, so it can neither occlude the cube nor be occluded
/// by the geometry it was flattened from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum DrawStep {
    Plane,
    Cube,
    CubeShadow,
}

const DRAW_ORDER: [DrawStep; 3] = [DrawStep::Plane, DrawStep::Cube, DrawStep::CubeShadow];

pub struct Scene {
    clock: SceneClock,

    pipelines: ScenePipelines,

    cube: MeshBuffers,
    plane: MeshBuffers,

    view_buffer: UniformBuffer<ViewUniform>,
    projection_buffer: UniformBuffer<ProjectionUniform>,
    plane_buffer: UniformBuffer<ModelUniform>,
    cube_buffer: UniformBuffer<ModelUniform>,
    shadow_buffer: UniformBuffer<ModelUniform>,

    camera_group: wgpu::BindGroup,
    plane_group: wgpu::BindGroup,
    cube_group: wgpu::BindGroup,
    shadow_group: wgpu::BindGroup,
    material_group: wgpu::BindGroup,

    diffuse: Texture2d,
    sampler: wgpu::Sampler,

    depth: DepthTarget,
}

fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(name)
}

impl Scene {
    /// Builds every scene resource, in dependency order. Any failure aborts
    /// startup; there is no partial scene.
    pub fn new(ctx: &RenderCtx<'_>, software_adapter: bool) -> Result<Self> {
        let shader_path = asset_path("scene.wgsl");
        let shader_source = std::fs::read_to_string(&shader_path)
            .with_context(|| format!("failed to read shader source {}", shader_path.display()))?;

        let pipelines = ScenePipelines::new(ctx.device, ctx.surface_format, &shader_source);

        let cube_mesh = geometry::cube();
        let plane_mesh = geometry::ground_plane();
        let cube = MeshBuffers::new(ctx.device, "anshar cube", &cube_mesh.vertices, &cube_mesh.indices);
        let plane = MeshBuffers::new(
            ctx.device,
            "anshar plane",
            &plane_mesh.vertices,
            &plane_mesh.indices,
        );

        let view_buffer = UniformBuffer::new(ctx.device, "anshar view ubo");
        let projection_buffer = UniformBuffer::new(ctx.device, "anshar projection ubo");
        let plane_buffer = UniformBuffer::new(ctx.device, "anshar plane ubo");
        let cube_buffer = UniformBuffer::new(ctx.device, "anshar cube ubo");
        let shadow_buffer = UniformBuffer::new(ctx.device, "anshar shadow ubo");

        let texture_path = asset_path("checker.png");
        let diffuse_image = image::open(&texture_path)
            .with_context(|| format!("failed to load texture {}", texture_path.display()))?
            .to_rgba8();
        let diffuse = Texture2d::from_rgba8(
            ctx.device,
            ctx.queue,
            "anshar diffuse",
            diffuse_image.width(),
            diffuse_image.height(),
            diffuse_image.as_raw(),
        );

        let sampler = linear_sampler(ctx.device);

        let camera_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("anshar camera bind group"),
            layout: &pipelines.camera_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: view_buffer.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: projection_buffer.binding(),
                },
            ],
        });

        let model_group = |label: &str, buffer: &UniformBuffer<ModelUniform>| {
            ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &pipelines.model_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.binding(),
                }],
            })
        };

        let plane_group = model_group("anshar plane bind group", &plane_buffer);
        let cube_group = model_group("anshar cube bind group", &cube_buffer);
        let shadow_group = model_group("anshar shadow bind group", &shadow_buffer);

        let material_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("anshar material bind group"),
            layout: &pipelines.material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(diffuse.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let depth = DepthTarget::new(ctx.device, ctx.size);

        log::debug!("scene resources created");

        Ok(Self {
            clock: SceneClock::new(software_adapter),
            pipelines,
            cube,
            plane,
            view_buffer,
            projection_buffer,
            plane_buffer,
            cube_buffer,
            shadow_buffer,
            camera_group,
            plane_group,
            cube_group,
            shadow_group,
            material_group,
            diffuse,
            sampler,
            depth,
        })
    }

    /// Recreates the depth target when the drawable size changed.
    pub fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        if !self.depth.matches(ctx.size) {
            self.depth = DepthTarget::new(ctx.device, ctx.size);
        }
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        self.depth.view()
    }

    /// Advances scene time and pushes all per-frame constants.
    pub fn update(&mut self, ctx: &RenderCtx<'_>, time: FrameTime) {
        let t = self.clock.advance(time.now);

        self.view_buffer
            .write(ctx.queue, &ViewUniform::new(transforms::view_matrix()));

        let aspect = ctx.size.width.max(1) as f32 / ctx.size.height.max(1) as f32;
        self.projection_buffer.write(
            ctx.queue,
            &ProjectionUniform::new(transforms::projection_matrix(aspect)),
        );

        self.plane_buffer.write(
            ctx.queue,
            &ModelUniform::new(transforms::plane_world(), transforms::PLANE_COLOR),
        );

        let cube_world = transforms::cube_world(t);
        self.cube_buffer.write(
            ctx.queue,
            &ModelUniform::new(cube_world, transforms::animated_color(t)),
        );

        let shadow_world =
            transforms::shadow_matrix(transforms::LIGHT_POS, transforms::PLANE_HEIGHT) * cube_world;
        self.shadow_buffer.write(
            ctx.queue,
            &ModelUniform::new(shadow_world, transforms::SHADOW_COLOR),
        );
    }

    /// Records the fixed draw sequence into one pass over the cleared targets.
    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let mut rpass = target
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("anshar scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: target.depth_view.map(|view| {
                    wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        }),
                    }
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

        rpass.set_viewport(
            0.0,
            0.0,
            ctx.size.width.max(1) as f32,
            ctx.size.height.max(1) as f32,
            0.0,
            1.0,
        );

        for step in DRAW_ORDER {
            match step {
                DrawStep::Plane => {
                    rpass.set_pipeline(&self.pipelines.scene);
                    rpass.set_bind_group(0, &self.camera_group, &[]);
                    rpass.set_bind_group(1, &self.plane_group, &[]);
                    rpass.set_bind_group(2, &self.material_group, &[]);
                    self.plane.bind(&mut rpass);
                    rpass.draw_indexed(0..self.plane.index_count(), 0, 0..1);
                }

                DrawStep::Cube => {
                    rpass.set_pipeline(&self.pipelines.scene);
                    rpass.set_bind_group(0, &self.camera_group, &[]);
                    rpass.set_bind_group(1, &self.cube_group, &[]);
                    rpass.set_bind_group(2, &self.material_group, &[]);
                    self.cube.bind(&mut rpass);
                    rpass.draw_indexed(0..self.cube.index_count(), 0, 0..1);
                }

                DrawStep::CubeShadow => {
                    // Same cube geometry, flattened by the shadow transform.
                    rpass.set_pipeline(&self.pipelines.shadow);
                    rpass.set_blend_constant(wgpu::Color::TRANSPARENT);
                    rpass.set_bind_group(0, &self.camera_group, &[]);
                    rpass.set_bind_group(1, &self.shadow_group, &[]);
                    self.cube.bind(&mut rpass);
                    rpass.draw_indexed(0..self.cube.index_count(), 0, 0..1);
                }
            }
        }
    }
}
