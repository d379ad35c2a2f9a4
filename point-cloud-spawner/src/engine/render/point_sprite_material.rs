use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use constants::render_settings::{
    SPRITE_DIFFUSE, SPRITE_MASK_RADIUS, SPRITE_OPACITY, SPRITE_SCALE, SPRITE_SIZE,
    SPRITE_TRANSPARENT,
};

const SHADER_ASSET_PATH: &str = "shaders/point_sprite.wgsl";

/// Uniform block shared by the sprite vertex and fragment stages.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct PointSpriteParams {
    pub diffuse: Vec3,
    pub opacity: f32,
    pub size: f32,
    pub scale: f32,
    pub mask_radius: f32,
}

/// Unlit round sprite material. Output colour is `diffuse * vertex colour`
/// with a fixed opacity; lights are ignored.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointSpriteMaterial {
    #[uniform(0)]
    pub params: PointSpriteParams,
    pub alpha_mode: AlphaMode,
}

impl Default for PointSpriteMaterial {
    fn default() -> Self {
        Self {
            params: PointSpriteParams {
                diffuse: Vec3::from_array(SPRITE_DIFFUSE),
                opacity: SPRITE_OPACITY,
                size: SPRITE_SIZE,
                scale: SPRITE_SCALE,
                mask_radius: SPRITE_MASK_RADIUS,
            },
            alpha_mode: if SPRITE_TRANSPARENT {
                AlphaMode::Blend
            } else {
                AlphaMode::Opaque
            },
        }
    }
}

impl Material for PointSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads are built facing the camera; winding depends on the corner order only.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_uses_sprite_settings() {
        let material = PointSpriteMaterial::default();
        assert_eq!(material.params.size, 5.0);
        assert_eq!(material.params.scale, 10.0);
        assert_eq!(material.params.opacity, 0.1);
        assert_eq!(material.params.mask_radius, 0.4);
        assert_eq!(material.params.diffuse, Vec3::ONE);
        assert!(matches!(material.alpha_mode, AlphaMode::Opaque));
    }
}
