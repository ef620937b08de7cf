//! A `winit` window that shows frames by drawing a `wgpu` texture over its surface.

use std::{mem::size_of, num::NonZeroU32};

use log::{debug, info, warn};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::EventLoop,
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};

use crate::{
    config::Config,
    error::Error,
    presenter::{Poll, Presenter},
    screen,
    var::Var,
};

/// Packed `0xAARRGGBB` values are `B, G, R, A` in memory.
const FRAME_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

/// Opened at the configured size in logical (DPI-unscaled) pixels; frames are
/// rendered at the window's physical size, which follows resizes and scale changes.
pub struct WindowPresenter {
    render_bind_group: wgpu::BindGroup,
    render_bind_group_layout: wgpu::BindGroupLayout,
    render_pipeline: wgpu::RenderPipeline,
    frame_size: Var<screen::Size>,
    frame_texture: wgpu::Texture,
    surface: wgpu::Surface,
    surface_configuration: wgpu::SurfaceConfiguration,
    queue: wgpu::Queue,
    device: wgpu::Device,
    window: Window,
    event_loop: EventLoop<()>,
    size: screen::Size,
    minimized: bool,
    clear_pending: bool,
}

impl WindowPresenter {
    pub fn open(config: &Config) -> Result<Self, Error> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .build(&event_loop)?;

        let instance = wgpu::Instance::new(wgpu::Backends::all());
        let surface = unsafe { instance.create_surface(&window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(Error::NoAdapter)?;
        debug!("adapter: {:?}", adapter.get_info());

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        // Colours are already in display space, so avoid an sRGB surface when there is a choice.
        let formats = surface.get_supported_formats(&adapter);
        let format = formats
            .iter()
            .copied()
            .find(|format| !format.describe().srgb)
            .or_else(|| formats.first().copied())
            .ok_or(Error::NoSurfaceFormat)?;

        let inner_size = window.inner_size();
        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: inner_size.width,
            height: inner_size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        let minimized = inner_size.width == 0 || inner_size.height == 0;
        if !minimized {
            surface.configure(&device, &surface_configuration);
        }

        // Render at the renderer's output size, not the requested logical size.
        let size = if minimized {
            screen::Size::of_frame(config)
        } else {
            screen::Size::from(inner_size)
        };
        debug!(
            "scale factor {}: frame is {}x{}",
            window.scale_factor(),
            size.width,
            size.height
        );

        let frame_texture = create_frame_texture(&device, size);

        let frame_size = Var::new(&device, "frame-size-buffer", size);

        let render_shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("render-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let render_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("render-bind-group-layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: false },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("render-pipeline-layout"),
                bind_group_layouts: &[&render_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render-pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &render_shader_module,
                entry_point: "vertex_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &render_shader_module,
                entry_point: "fragment_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_configuration.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        let render_bind_group =
            create_render_bind_group(&device, &render_bind_group_layout, &frame_texture, &frame_size);

        info!(
            "opened {:?} at {}x{} ({:?})",
            config.title, size.width, size.height, format
        );

        Ok(Self {
            render_bind_group,
            render_bind_group_layout,
            render_pipeline,
            frame_size,
            frame_texture,
            surface,
            surface_configuration,
            queue,
            device,
            window,
            event_loop,
            size,
            minimized,
            clear_pending: false,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        debug!("resizing to {:?}", size);

        self.minimized = size.width == 0 || size.height == 0;
        if self.minimized {
            return;
        }

        self.surface_configuration.width = size.width;
        self.surface_configuration.height = size.height;
        self.surface.configure(&self.device, &self.surface_configuration);

        let size = screen::Size::from(size);
        if size != self.size {
            self.size = size;
            self.frame_texture = create_frame_texture(&self.device, size);
            self.frame_size.write(&self.queue, size);
            self.render_bind_group = create_render_bind_group(
                &self.device,
                &self.render_bind_group_layout,
                &self.frame_texture,
                &self.frame_size,
            );
        }
    }

    fn upload(&self, pixels: &[u32], row_width: u32) {
        let rows = (pixels.len() / row_width as usize) as u32;
        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.frame_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(pixels),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(row_width * size_of::<u32>() as u32),
                rows_per_image: NonZeroU32::new(rows),
            },
            wgpu::Extent3d {
                width: row_width,
                height: rows,
                depth_or_array_layers: 1,
            },
        );
    }
}

fn create_frame_texture(device: &wgpu::Device, size: screen::Size) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("frame-texture"),
        size: wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FRAME_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    })
}

fn create_render_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    frame_texture: &wgpu::Texture,
    frame_size: &Var<screen::Size>,
) -> wgpu::BindGroup {
    let frame_texture_view = frame_texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("render-bind-group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&frame_texture_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: frame_size.binding_resource(),
            },
        ],
    })
}

impl Presenter for WindowPresenter {
    fn poll(&mut self) -> Poll {
        let window_id = self.window.id();
        let mut poll = Poll::Continue;
        let mut resized = None;

        // Pump whatever is queued and hand control back once the queue is empty.
        self.event_loop.run_return(|event, _, control_flow| {
            control_flow.set_poll();
            match event {
                Event::WindowEvent { window_id: id, event } if id == window_id => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => {
                        poll = Poll::Quit;
                    }
                    WindowEvent::Resized(size) => {
                        resized = Some(size);
                    }
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        resized = Some(*new_inner_size);
                    }
                    _ => {}
                },
                Event::MainEventsCleared => {
                    control_flow.set_exit();
                }
                _ => {}
            }
        });

        if let Some(size) = resized {
            self.resize(size);
        }

        poll
    }

    fn frame_size(&self) -> screen::Size {
        self.size
    }

    fn clear(&mut self) {
        self.clear_pending = true;
    }

    fn present(&mut self, pixels: &[u32], row_width: u32) -> Result<(), Error> {
        if self.minimized {
            return Ok(());
        }

        // A frame computed before the latest resize no longer fits the texture.
        if row_width != self.size.width
            || pixels.len() != self.size.width as usize * self.size.height as usize
        {
            debug!("dropping stale {}-wide frame", row_width);
            return Ok(());
        }

        self.upload(pixels, row_width);

        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                warn!("{}, reconfiguring surface", error);
                self.surface.configure(&self.device, &self.surface_configuration);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(error) => return Err(Error::Surface(error)),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let load = if self.clear_pending {
            wgpu::LoadOp::Clear(wgpu::Color::BLACK)
        } else {
            wgpu::LoadOp::Load
        };

        let mut command_encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        command_encoder.push_debug_group("render-pass");
        {
            let mut render_pass = command_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations { load, store: true },
                })],
                depth_stencil_attachment: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.render_bind_group, &[]);
            render_pass.draw(0..4, 0..1);
        }
        command_encoder.pop_debug_group();

        self.queue.submit([command_encoder.finish()]);
        surface_texture.present();
        self.clear_pending = false;

        Ok(())
    }
}

/// Nothing is released here by hand. Fields drop in declaration order after
/// this runs: the GPU objects drawing to the surface, then the surface, then
/// the window it was created from, then the event loop.
impl Drop for WindowPresenter {
    fn drop(&mut self) {
        info!("closing window");
    }
}
